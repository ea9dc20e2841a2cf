fn main() {
    mandelview::run_gui();
}
