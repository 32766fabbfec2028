use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = interp_drv::main_impl() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
