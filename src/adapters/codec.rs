use crate::domain::model::Record;
use crate::domain::ports::RecordCodec;
use crate::utils::error::Result;
use csv::{ReaderBuilder, Trim};

pub const CSV_FILE_NAME: &str = "Dane.csv";
pub const JSON_FILE_NAME: &str = "Dane.json";

/// Two-row semicolon-delimited text: a header row and one data row. The
/// exact byte layout (spaces around separators, trailing semicolons) is part
/// of the stable on-disk format.
pub struct CsvCodec;

impl RecordCodec for CsvCodec {
    fn file_name(&self) -> &'static str {
        CSV_FILE_NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let text = format!(
            "Model; Wynik; Czas; \n{} ; {} ; {};\n",
            record.model, record.score, record.time
        );
        Ok(text.into_bytes())
    }

    fn decode(&self, data: &[u8]) -> Option<Record> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b';')
            .trim(Trim::All)
            .flexible(true)
            .from_reader(data);

        let row = reader.records().next()?.ok()?;
        let fields: Vec<&str> = row.iter().filter(|field| !field.is_empty()).collect();
        if fields.len() < 3 {
            return None;
        }

        Some(Record {
            model: fields[0].to_string(),
            score: fields[1].parse().ok()?,
            time: fields[2].to_string(),
        })
    }
}

/// Pretty-printed JSON object with the same field names as the CSV header.
pub struct JsonCodec;

impl RecordCodec for JsonCodec {
    fn file_name(&self) -> &'static str {
        JSON_FILE_NAME
    }

    fn encode(&self, record: &Record) -> Result<Vec<u8>> {
        let data = serde_json::to_vec_pretty(record)?;
        Ok(data)
    }

    fn decode(&self, data: &[u8]) -> Option<Record> {
        let value: serde_json::Value = serde_json::from_slice(data).ok()?;
        let model = value.get("Model")?.as_str()?.to_string();
        // A missing score still yields a usable record; the time field may
        // be a string or a bare number.
        let score = value.get("Wynik").and_then(|w| w.as_i64()).unwrap_or(0);
        let time = match value.get("Czas") {
            Some(serde_json::Value::String(s)) => s.trim().to_string(),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => String::new(),
        };

        Some(Record { model, score, time })
    }
}
