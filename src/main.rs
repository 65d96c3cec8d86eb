fn main() -> anyhow::Result<()> {
    lexdef::run()
}
