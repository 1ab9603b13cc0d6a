//! One-page web form
//!
//! `GET /` shows the form, `POST /` asks the question and re-renders the
//! page with the raw question, the processed question and the answer.

mod page;
mod routes;

pub use routes::{AppState, QuestionForm, create_app, serve};
