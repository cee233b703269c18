use std::process::ExitCode;

fn main() -> ExitCode {
    pulse_ingest_lib::run()
}
