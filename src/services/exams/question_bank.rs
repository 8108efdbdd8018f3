//! 题库：每个主题一个 JSON 文件 `{questions_dir}/{topic}.json`

use rand::seq::SliceRandom;
use std::path::PathBuf;

use crate::errors::{DojoSystemError, Result};
use crate::models::exams::entities::Question;

/// 主题名只允许字母、数字、`-` 和 `_`
pub fn is_valid_topic(topic: &str) -> bool {
    !topic.is_empty()
        && topic.len() <= 64
        && topic
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

pub struct QuestionBank {
    dir: PathBuf,
}

impl QuestionBank {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// 读取单个主题，格式错误的文件视为错误
    pub fn load_topic(&self, topic: &str) -> Result<Vec<Question>> {
        if !is_valid_topic(topic) {
            return Err(DojoSystemError::validation(format!("Invalid topic name: {topic}")));
        }

        let path = self.dir.join(format!("{topic}.json"));
        let raw = std::fs::read_to_string(&path).map_err(|e| {
            DojoSystemError::file_operation(format!("{}: {e}", path.display()))
        })?;
        let questions: Vec<Question> = serde_json::from_str(&raw).map_err(|e| {
            DojoSystemError::serialization(format!("{}: {e}", path.display()))
        })?;

        for (i, q) in questions.iter().enumerate() {
            if q.question.trim().is_empty() || q.options.len() < 2 {
                return Err(DojoSystemError::validation(format!(
                    "{topic}.json #{i}: question needs text and at least two options"
                )));
            }
            if !q.options.contains(&q.answer) {
                return Err(DojoSystemError::validation(format!(
                    "{topic}.json #{i}: answer is not one of the options"
                )));
            }
        }

        Ok(questions)
    }

    /// 合并所有主题，打乱后取前 `count` 题
    pub fn draw(&self, topics: &[String], count: usize) -> Result<Vec<Question>> {
        let mut pool = Vec::new();
        for topic in topics {
            pool.extend(self.load_topic(topic)?);
        }
        if pool.is_empty() {
            return Err(DojoSystemError::validation("Question bank is empty"));
        }

        pool.shuffle(&mut rand::rng());
        pool.truncate(count);
        Ok(pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bank_with(files: &[(&str, &str)]) -> (QuestionBank, PathBuf) {
        let dir = std::env::temp_dir().join(format!("dojo-questions-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        for (name, body) in files {
            std::fs::write(dir.join(format!("{name}.json")), body).unwrap();
        }
        (QuestionBank::new(&dir), dir)
    }

    const HISTORIA: &str = r#"[
        {"question": "Origem do judô?", "options": ["Japão", "Brasil"], "answer": "Japão"},
        {"question": "Fundador?", "options": ["Kano", "Funakoshi"], "answer": "Kano"},
        {"question": "Ano de fundação?", "options": ["1882", "1950"], "answer": "1882"}
    ]"#;

    #[test]
    fn test_topic_names() {
        assert!(is_valid_topic("faixa_azul-1"));
        assert!(!is_valid_topic("../etc/passwd"));
        assert!(!is_valid_topic(""));
    }

    #[test]
    fn test_draw_truncates_and_shuffles_pool() {
        let (bank, dir) = bank_with(&[
            ("historia", HISTORIA),
            ("regras", r#"[{"question": "Ippon vale?", "options": ["1", "10"], "answer": "10"}]"#),
        ]);

        let drawn = bank
            .draw(&["historia".to_string(), "regras".to_string()], 3)
            .unwrap();
        assert_eq!(drawn.len(), 3);

        let all = bank
            .draw(&["historia".to_string(), "regras".to_string()], 10)
            .unwrap();
        assert_eq!(all.len(), 4);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_malformed_files_are_errors() {
        let (bank, dir) = bank_with(&[
            ("quebrado", "{not json"),
            ("sem_resposta", r#"[{"question": "?", "options": ["a", "b"], "answer": "c"}]"#),
        ]);

        assert!(bank.load_topic("quebrado").is_err());
        assert!(bank.load_topic("sem_resposta").is_err());
        assert!(bank.load_topic("inexistente").is_err());
        assert!(bank.draw(&[], 5).is_err());

        let _ = std::fs::remove_dir_all(dir);
    }
}
