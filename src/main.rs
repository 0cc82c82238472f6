fn main() {
    dashvars::app::cli::run();
}
