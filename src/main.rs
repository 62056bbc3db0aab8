fn main() {
    cpd::app::cli::run();
}
