use std::io::Write;

/// Header of every batch in the fact script.
pub const TICKET_INSERT_HEADER: &str =
    "INSERT INTO ticket (id_veiculo, id_tipo, id_praca, valor, data_hora) VALUES\n";

/// Writes multi-row INSERT statements and counts the bytes written.
pub struct SqlBatchWriter<W: Write> {
    inner: CountingWriter<W>,
    batches: u64,
}

impl<W: Write> SqlBatchWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner: CountingWriter::new(inner),
            batches: 0,
        }
    }

    /// Write one `INSERT ... VALUES` statement holding every tuple.
    ///
    /// Tuples are joined with `,\n` and the statement ends with `;` and a
    /// blank line. An empty batch writes nothing.
    pub fn write_batch(&mut self, header: &str, tuples: &[String]) -> std::io::Result<()> {
        if tuples.is_empty() {
            return Ok(());
        }
        self.inner.write_all(header.as_bytes())?;
        self.inner.write_all(tuples.join(",\n").as_bytes())?;
        self.inner.write_all(b";\n\n")?;
        self.batches += 1;
        Ok(())
    }

    pub fn batches(&self) -> u64 {
        self.batches
    }

    pub fn bytes_written(&self) -> u64 {
        self.inner.bytes_written()
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_layout() {
        let mut out = Vec::new();
        let mut writer = SqlBatchWriter::new(&mut out);
        writer
            .write_batch("INSERT INTO t (a) VALUES\n", &["(1)".to_string(), "(2)".to_string()])
            .expect("write batch");
        writer.write_batch("INSERT INTO t (a) VALUES\n", &[]).expect("empty batch");
        assert_eq!(writer.batches(), 1);
        let written = writer.bytes_written();

        let text = String::from_utf8(out).expect("utf8");
        assert_eq!(text, "INSERT INTO t (a) VALUES\n(1),\n(2);\n\n");
        assert_eq!(written, text.len() as u64);
    }
}
