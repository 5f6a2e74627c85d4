fn main() -> std::process::ExitCode {
    phrasegen_lib::run()
}
