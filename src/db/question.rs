use color_eyre::Result;
use libsql::params;

use super::helpers::{query_all, query_one};
use super::Db;
use crate::models::{NewQuestion, Question};

impl Db {
    pub async fn questions(&self) -> Result<Vec<Question>> {
        let conn = self.db.connect()?;
        query_all(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
            (),
        )
        .await
    }

    pub async fn questions_in_category(&self, category: i64) -> Result<Vec<Question>> {
        let conn = self.db.connect()?;
        query_all(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE category = ? ORDER BY id",
            params![category],
        )
        .await
    }

    /// Case-insensitive substring match on the question text. `instr` keeps
    /// `%` and `_` in the term literal, unlike LIKE.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        let conn = self.db.connect()?;
        query_all(
            &conn,
            "SELECT id, question, answer, category, difficulty FROM questions \
             WHERE instr(lower(question), lower(?)) > 0 ORDER BY id",
            params![term],
        )
        .await
    }

    pub async fn insert_question(&self, new: &NewQuestion) -> Result<Question> {
        let conn = self.db.connect()?;
        let question = query_one::<Question>(
            &conn,
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES (?, ?, ?, ?) RETURNING id, question, answer, category, difficulty",
            params![
                new.question.as_str(),
                new.answer.as_str(),
                new.category,
                new.difficulty
            ],
        )
        .await?;

        tracing::info!("new question created: id={}", question.id);
        Ok(question)
    }

    /// Delete by id. Returns false when no row had that id.
    pub async fn delete_question(&self, id: i64) -> Result<bool> {
        let conn = self.db.connect()?;
        let affected = conn
            .execute("DELETE FROM questions WHERE id = ?", params![id])
            .await?;

        if affected > 0 {
            tracing::info!("question deleted: id={id}");
        }
        Ok(affected > 0)
    }
}
