fn main() {
    if let Err(err) = dashboard_grid::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
