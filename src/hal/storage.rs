pub trait Storage {
    fn persist(&self, text: &str) -> anyhow::Result<()>;
}
