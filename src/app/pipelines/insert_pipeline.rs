use crate::core::{ConfigProvider, ExtractResult, Pipeline, SqlBatch, Storage};
use crate::domain::services::definition::parse_definition;
use crate::domain::services::records::parse_records;
use crate::domain::services::statement::build_statement;
use crate::utils::error::Result;

pub struct InsertPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> InsertPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for InsertPipeline<S, C> {
    fn extract(&self) -> Result<ExtractResult> {
        // 讀取表定義
        tracing::debug!(
            "Reading table definition from: {}",
            self.config.definition_file()
        );
        let definition_bytes = self.storage.read_file(self.config.definition_file())?;
        let table = parse_definition(&String::from_utf8_lossy(&definition_bytes))?;
        tracing::debug!("Parsed {} column definitions", table.columns.len());

        // 讀取數據文件
        tracing::debug!("Reading records from: {}", self.config.data_file());
        let data_bytes = self.storage.read_file(self.config.data_file())?;
        let records = parse_records(&data_bytes)?;
        tracing::debug!("Read {} records", records.len());

        Ok(ExtractResult { table, records })
    }

    fn transform(&self, input: ExtractResult) -> Result<SqlBatch> {
        let mut statements = Vec::with_capacity(input.records.len());

        for (index, record) in input.records.iter().enumerate() {
            let sql = build_statement(
                self.config.schema(),
                self.config.table(),
                &input.table,
                record,
                index,
            )?;
            statements.push(sql);
        }

        Ok(SqlBatch { statements })
    }

    fn load(&self, batch: SqlBatch) -> Result<String> {
        let output_path = self.config.output_file().to_string();

        let mut buffer = String::new();
        for statement in &batch.statements {
            buffer.push_str(statement);
        }

        tracing::debug!(
            "Writing {} bytes to: {}",
            buffer.len(),
            output_path
        );
        self.storage.write_file(&output_path, buffer.as_bytes())?;

        tracing::info!(
            "{} records will be inserted into {}.{} table",
            batch.statements.len(),
            self.config.schema(),
            self.config.table()
        );

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SqlGenError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct MockStorage {
        files: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Mutex::new(HashMap::new()),
            }
        }

        fn put(&self, path: &str, data: &[u8]) {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_string(), data.to_vec());
        }

        fn get(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                SqlGenError::ReadError {
                    path: path.to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
                }
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.put(path, data);
            Ok(())
        }
    }

    struct StubConfig;

    impl ConfigProvider for StubConfig {
        fn schema(&self) -> &str {
            "tst1"
        }
        fn table(&self) -> &str {
            "test_table"
        }
        fn definition_file(&self) -> &str {
            "table_def.txt"
        }
        fn data_file(&self) -> &str {
            "data.txt"
        }
        fn output_file(&self) -> &str {
            "insert_records.sql"
        }
    }

    fn seeded_pipeline() -> InsertPipeline<MockStorage, StubConfig> {
        let storage = MockStorage::new();
        storage.put(
            "table_def.txt",
            b"COLUMN_NAME DATA_TYPE\n----------- ---------\nID NUMBER\nNAME VARCHAR2(10) NOT NULL\nCREATED DATE\n",
        );
        storage.put("data.txt", b"42,Alice,2024-01-15\n7,Bob,2024-02-01\n");
        InsertPipeline::new(storage, StubConfig)
    }

    #[test]
    fn test_extract_parses_both_inputs() {
        let pipeline = seeded_pipeline();
        let input = pipeline.extract().unwrap();

        assert_eq!(input.table.column_list, "ID, NAME, CREATED");
        assert_eq!(input.records.len(), 2);
    }

    #[test]
    fn test_transform_keeps_input_order() {
        let pipeline = seeded_pipeline();
        let input = pipeline.extract().unwrap();
        let batch = pipeline.transform(input).unwrap();

        assert_eq!(batch.statements.len(), 2);
        assert!(batch.statements[0].contains("42, 'Alice'"));
        assert!(batch.statements[1].contains("7, 'Bob'"));
    }

    #[test]
    fn test_transform_rejects_short_record() {
        let pipeline = seeded_pipeline();
        pipeline.storage.put("data.txt", b"42,Alice,2024-01-15\n7,Bob\n");

        let input = pipeline.extract().unwrap();
        let err = pipeline.transform(input).unwrap_err();

        assert!(matches!(
            err,
            SqlGenError::FieldCountError {
                record_index: 1,
                expected: 3,
                actual: 2,
            }
        ));
    }

    #[test]
    fn test_load_writes_all_statements_to_output() {
        let pipeline = seeded_pipeline();
        let input = pipeline.extract().unwrap();
        let batch = pipeline.transform(input).unwrap();
        let output_path = pipeline.load(batch).unwrap();

        assert_eq!(output_path, "insert_records.sql");
        let written = pipeline.storage.get("insert_records.sql").unwrap();
        let written = String::from_utf8(written).unwrap();
        assert_eq!(written.lines().count(), 2);
        assert!(written.starts_with("insert into tst1.test_table"));
    }

    #[test]
    fn test_extract_fails_on_missing_data_file() {
        let storage = MockStorage::new();
        storage.put("table_def.txt", b"H\n-\nID NUMBER\n");
        let pipeline = InsertPipeline::new(storage, StubConfig);

        let err = pipeline.extract().unwrap_err();
        assert!(err.to_string().contains("data.txt"));
    }
}
