fn main() {
    if let Err(err) = pipeline_flow_layout::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
