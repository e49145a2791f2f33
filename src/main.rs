use std::process::ExitCode;

fn main() -> ExitCode {
    match file_explorer_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("file-explorer: {}", e);
            ExitCode::FAILURE
        }
    }
}
