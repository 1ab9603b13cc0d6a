//! HTML rendering for the question page

use qa_domain::{Answer, AskResult};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }
textarea { width: 100%; min-height: 6rem; }
section { margin-top: 1.5rem; }
pre { white-space: pre-wrap; background: #f5f5f5; padding: 1rem; border-radius: 4px; }
.error { color: #b00020; }
"#;

/// Escape user or model text for an HTML text node
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Render the page, with the exchange below the form when present
pub fn render(result: Option<&AskResult>) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>LLM Q&amp;A</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n<h1>LLM Q&amp;A</h1>\n");
    html.push_str(
        "<form method=\"post\" action=\"/\">\n\
         <label for=\"question_input\">Enter your question:</label>\n\
         <textarea id=\"question_input\" name=\"question_input\"></textarea>\n\
         <button type=\"submit\">Ask</button>\n\
         </form>\n",
    );

    if let Some(result) = result {
        html.push_str(&format!(
            "<section id=\"raw-question\">\n<h2>Your question</h2>\n<p>{}</p>\n</section>\n",
            escape(result.question.content())
        ));
        html.push_str(&format!(
            "<section id=\"processed-question\">\n<h2>Processed question</h2>\n<p>{}</p>\n</section>\n",
            escape(result.processed.content())
        ));
        let (class, body) = match &result.answer {
            Answer::Text(text) => ("answer", escape(text)),
            Answer::Failed(failure) => ("answer error", escape(&failure.to_string())),
        };
        html.push_str(&format!(
            "<section id=\"answer\">\n<h2>LLM answer</h2>\n<pre class=\"{}\">{}</pre>\n</section>\n",
            class, body
        ));
    }

    html.push_str("</body>\n</html>\n");
    html
}
