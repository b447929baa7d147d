fn main() -> picasso::Result<()> {
    picasso::run(wild::args_os())
}
