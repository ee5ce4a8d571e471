fn main() {
    pkgx::run_cli();
}
