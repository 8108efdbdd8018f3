//! 判分

use crate::models::exams::entities::{Question, QuestionDetail};

#[derive(Debug, Clone, PartialEq)]
pub struct Score {
    pub correct: i32,
    pub total: i32,
    pub percentage: f64,
    pub passed: bool,
    pub details: Vec<QuestionDetail>,
}

/// 答案按题目顺序一一对应，数量不一致时返回 None
pub fn score_answers(
    questions: &[Question],
    answers: &[Option<String>],
    pass_percentage: i32,
) -> Option<Score> {
    if questions.len() != answers.len() {
        return None;
    }

    let details: Vec<QuestionDetail> = questions
        .iter()
        .zip(answers)
        .map(|(q, selected)| {
            let selected = selected
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            QuestionDetail {
                question: q.question.clone(),
                correct: selected.as_deref() == Some(q.answer.as_str()),
                selected,
                correct_answer: q.answer.clone(),
            }
        })
        .collect();

    let total = details.len() as i32;
    let correct = details.iter().filter(|d| d.correct).count() as i32;
    let percentage = if total == 0 {
        0.0
    } else {
        (f64::from(correct) * 10000.0 / f64::from(total)).round() / 100.0
    };

    Some(Score {
        correct,
        total,
        percentage,
        passed: total > 0 && percentage >= f64::from(pass_percentage),
        details,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(answer: &str) -> Question {
        Question {
            question: format!("Pergunta {answer}"),
            options: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            answer: answer.to_string(),
        }
    }

    #[test]
    fn test_score_counts_correct_answers() {
        let questions = vec![question("a"), question("b"), question("c")];
        let answers = vec![Some("a".to_string()), None, Some("c".to_string())];

        let score = score_answers(&questions, &answers, 60).unwrap();
        assert_eq!(score.correct, 2);
        assert_eq!(score.total, 3);
        assert_eq!(score.percentage, 66.67);
        assert!(score.passed);
        assert!(!score.details[1].correct);
        assert_eq!(score.details[1].selected, None);
    }

    #[test]
    fn test_pass_threshold_is_inclusive() {
        let questions = vec![question("a"), question("b")];
        let answers = vec![Some("a".to_string()), Some("a".to_string())];

        assert!(score_answers(&questions, &answers, 50).unwrap().passed);
        assert!(!score_answers(&questions, &answers, 51).unwrap().passed);
    }

    #[test]
    fn test_mismatched_answer_count() {
        let questions = vec![question("a")];
        assert!(score_answers(&questions, &[], 70).is_none());
    }
}
