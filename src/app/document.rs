use std::io;

use anyhow::Context;
use serde::Serialize;
use serde_json::ser::Formatter;

use crate::app::network::NetworkConfig;
use crate::app::wifi::WirelessConfig;

/// Compact JSON that also writes `<`, `>`, `&` and `'` as `\u00XX` escapes.
struct HtmlSafeFormatter;

impl Formatter for HtmlSafeFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;

        for (i, c) in fragment.char_indices() {
            let escaped = match c {
                '<' => "\\u003c",
                '>' => "\\u003e",
                '&' => "\\u0026",
                '\'' => "\\u0027",
                _ => continue,
            };
            writer.write_all(fragment[start..i].as_bytes())?;
            writer.write_all(escaped.as_bytes())?;
            start = i + 1;
        }

        writer.write_all(fragment[start..].as_bytes())
    }
}

pub fn to_json<T: Serialize>(record: &T) -> anyhow::Result<String> {
    let mut out = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, HtmlSafeFormatter);
    record
        .serialize(&mut serializer)
        .context("Cannot serialize configuration")?;
    Ok(String::from_utf8(out)?)
}

/// Both commands as compact JSON objects, separated by a single newline.
pub fn compose(wifi: &WirelessConfig, network: &NetworkConfig) -> anyhow::Result<String> {
    Ok(format!("{}\n{}", to_json(wifi)?, to_json(network)?))
}
