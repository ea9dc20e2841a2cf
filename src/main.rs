fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = mandelview::PpmFilePresenter::new();

    mandelview::still_frame_controller(&presenter, "output/mandelbrot.ppm")?;

    Ok(())
}
