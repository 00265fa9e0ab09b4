fn main() {
    if let Err(err) = ordersheets::run(std::env::args_os()) {
        eprintln!("Error while creating Excel sheets: {err:#}");
        std::process::exit(1);
    }
}
