use std::io::Write;

use gimei_core::{Record, Script};

use crate::model::{GimeiAddress, GimeiName};

/// Write names as CSV: gender, the composite scripts, then the last and
/// first name scripts.
pub fn write_names_csv<W: Write>(writer: W, names: &[GimeiName]) -> Result<u64, csv::Error> {
    let mut header = vec!["gender".to_string()];
    header.extend(script_columns(None));
    header.extend(script_columns(Some("last")));
    header.extend(script_columns(Some("first")));

    write_rows(
        writer,
        &header,
        names.iter().map(|name| {
            let mut row = vec![name.gender.to_string()];
            row.extend(Script::ALL.iter().map(|s| name.script(*s).to_string()));
            row.extend(record_fields(&name.last));
            row.extend(record_fields(&name.first));
            row
        }),
    )
}

/// Write addresses as CSV: the composite scripts, then prefecture, city and
/// town scripts.
pub fn write_addresses_csv<W: Write>(
    writer: W,
    addresses: &[GimeiAddress],
) -> Result<u64, csv::Error> {
    let mut header = script_columns(None);
    header.extend(script_columns(Some("prefecture")));
    header.extend(script_columns(Some("city")));
    header.extend(script_columns(Some("town")));

    write_rows(
        writer,
        &header,
        addresses.iter().map(|address| {
            let mut row: Vec<String> = Script::ALL
                .iter()
                .map(|s| address.script(*s).to_string())
                .collect();
            row.extend(record_fields(&address.prefecture));
            row.extend(record_fields(&address.city));
            row.extend(record_fields(&address.town));
            row
        }),
    )
}

fn write_rows<W, I>(writer: W, header: &[String], rows: I) -> Result<u64, csv::Error>
where
    W: Write,
    I: Iterator<Item = Vec<String>>,
{
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }

    writer.flush()?;
    let counting = writer.into_inner().map_err(|err| err.into_error())?;
    Ok(counting.bytes_written())
}

fn script_columns(prefix: Option<&str>) -> Vec<String> {
    Script::ALL
        .iter()
        .map(|script| match prefix {
            Some(prefix) => format!("{prefix}_{script}"),
            None => script.to_string(),
        })
        .collect()
}

fn record_fields(record: &Record) -> impl Iterator<Item = String> + '_ {
    Script::ALL
        .into_iter()
        .map(move |script| record.script(script).to_string())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
