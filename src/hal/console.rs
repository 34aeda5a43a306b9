pub trait Console {
    fn write(&self, text: &str);

    /// Reads one line without its line terminator. End of input yields an empty line.
    fn read_line(&self) -> anyhow::Result<String>;
}
