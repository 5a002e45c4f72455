use std::io::Write;

use gimei_core::Script;
use gimei_generate::output::{write_addresses_csv, write_names_csv};
use gimei_generate::{GenerationError, GimeiAddress, GimeiName};
use serde::Serialize;

use crate::CliError;
use crate::config::OutputFormat;

pub fn render_names<W: Write>(
    out: &mut W,
    names: &[GimeiName],
    format: OutputFormat,
    script: Script,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_lines(out, names.iter().map(|name| name.script(script))),
        OutputFormat::Json => write_json_lines(out, names),
        OutputFormat::Csv => {
            write_names_csv(out, names).map_err(GenerationError::from)?;
            Ok(())
        }
    }
}

pub fn render_addresses<W: Write>(
    out: &mut W,
    addresses: &[GimeiAddress],
    format: OutputFormat,
    script: Script,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_lines(
            out,
            addresses.iter().map(|address| address.script(script)),
        ),
        OutputFormat::Json => write_json_lines(out, addresses),
        OutputFormat::Csv => {
            write_addresses_csv(out, addresses).map_err(GenerationError::from)?;
            Ok(())
        }
    }
}

fn write_lines<'a, W, I>(out: &mut W, lines: I) -> Result<(), CliError>
where
    W: Write,
    I: Iterator<Item = &'a str>,
{
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

fn write_json_lines<W: Write, T: Serialize>(out: &mut W, values: &[T]) -> Result<(), CliError> {
    for value in values {
        serde_json::to_writer(&mut *out, value)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use gimei_core::{Gender, Record};

    use super::*;

    fn sample_name() -> GimeiName {
        GimeiName::compose(
            Gender::Male,
            Record::new("太郎", "たろう", "タロウ", "Taro"),
            Record::new("山田", "やまだ", "ヤマダ", "Yamada"),
        )
    }

    fn sample_address() -> GimeiAddress {
        GimeiAddress::compose(
            Record::new("東京都", "とうきょうと", "トウキョウト", "tokyo"),
            Record::new("千代田区", "ちよだく", "チヨダク", "chiyodaku"),
            Record::new("大手町", "おおてまち", "オオテマチ", "otemachi"),
        )
    }

    fn render_to_string(render: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut buffer = Vec::new();
        render(&mut buffer).expect("render");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn text_prints_selected_script() {
        let names = [sample_name(), sample_name()];
        let text = render_to_string(|out| {
            render_names(out, &names, OutputFormat::Text, Script::Katakana)
        });
        assert_eq!(text, "ヤマダ タロウ\nヤマダ タロウ\n");

        let addresses = [sample_address()];
        let text = render_to_string(|out| {
            render_addresses(out, &addresses, OutputFormat::Text, Script::Romaji)
        });
        assert_eq!(text, "tokyochiyodakuotemachi\n");
    }

    #[test]
    fn json_prints_one_object_per_line() {
        let names = [sample_name()];
        let text =
            render_to_string(|out| render_names(out, &names, OutputFormat::Json, Script::Kanji));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: GimeiName = serde_json::from_str(lines[0]).expect("parse json line");
        assert_eq!(parsed, sample_name());
    }

    #[test]
    fn csv_ignores_script_selection() {
        let addresses = [sample_address()];
        let text = render_to_string(|out| {
            render_addresses(out, &addresses, OutputFormat::Csv, Script::Romaji)
        });
        let mut lines = text.lines();
        assert!(lines.next().expect("header").starts_with("kanji,hiragana"));
        assert!(lines.next().expect("row").starts_with("東京都千代田区大手町,"));
    }
}
