/// Serializes `items` into CSV with a header row
/// # Error
/// Errors if an item cannot be serialized
pub fn serialize(items: impl Iterator<Item = impl serde::Serialize>) -> Result<Vec<u8>, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    for item in items {
        wtr.serialize(item)?
    }
    wtr.into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

/// Deserializes rows of a CSV with a header row
pub fn deserialize<'a, D: serde::de::DeserializeOwned + 'a>(
    data: &'a [u8],
) -> impl Iterator<Item = Result<D, csv::Error>> + 'a {
    let rdr = csv::ReaderBuilder::new()
        .delimiter(b',')
        .trim(csv::Trim::All)
        .from_reader(std::io::Cursor::new(data));
    rdr.into_deserialize()
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
    struct Row {
        key: String,
        value: Option<f64>,
    }

    #[test]
    fn roundtrip() {
        let rows = vec![
            Row {
                key: "a".to_string(),
                value: Some(1.5),
            },
            Row {
                key: "b".to_string(),
                value: None,
            },
        ];
        let data = serialize(rows.iter()).unwrap();
        assert_eq!(std::str::from_utf8(&data).unwrap(), "key,value\na,1.5\nb,\n");

        let back = deserialize::<Row>(&data).collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(back, rows);
    }
}
