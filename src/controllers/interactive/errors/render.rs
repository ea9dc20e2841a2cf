#[derive(Debug)]
pub struct RenderError {
    pub generation: u64,
    pub message: String,
}
