use std::fmt;

use crate::models::Question;

use super::script::{GRADING_SCRIPT, STYLE};

/// HTML-escaped view of free text.
pub struct Escaped<'a>(pub &'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.0;
        while let Some(index) = rest.find(['&', '<', '>', '"', '\'']) {
            f.write_str(&rest[..index])?;
            f.write_str(match rest.as_bytes()[index] {
                b'&' => "&amp;",
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'"' => "&quot;",
                _ => "&#x27;",
            })?;
            rest = &rest[index + 1..];
        }
        f.write_str(rest)
    }
}

/// A complete quiz page, ready to be formatted.
pub struct QuizDocument<'a> {
    pub title: &'a str,
    pub questions: &'a [Question],
    /// Answer key, already serialised to JSON.
    pub answer_key: &'a str,
    /// Feedback text for the grading script, already serialised to JSON.
    pub messages: &'a str,
}

impl fmt::Display for QuizDocument<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = Escaped(self.title);

        writeln!(f, "<!DOCTYPE html>")?;
        writeln!(f, "<html>")?;
        writeln!(f, "<head>")?;
        writeln!(f, "<meta charset=\"UTF-8\">")?;
        writeln!(f, "<title>{}</title>", title)?;
        writeln!(f, "<style>\n{}\n</style>", STYLE)?;
        writeln!(f, "</head>")?;
        writeln!(f, "<body>")?;
        writeln!(f, "<h1>{}</h1>", title)?;
        writeln!(f, "<form id=\"quizForm\">")?;

        for question in self.questions {
            write_question(f, question)?;
        }

        writeln!(f, "<button type=\"button\" id=\"submit\">Submit</button>")?;
        writeln!(f, "</form>")?;
        writeln!(f, "<p id=\"result\" class=\"summary\"></p>")?;
        writeln!(
            f,
            "<script type=\"application/json\" id=\"answer-key\">{}</script>",
            self.answer_key
        )?;
        writeln!(
            f,
            "<script type=\"application/json\" id=\"quiz-messages\">{}</script>",
            self.messages
        )?;
        writeln!(f, "<script>\n{}\n</script>", GRADING_SCRIPT)?;
        writeln!(f, "</body>")?;
        writeln!(f, "</html>")
    }
}

fn write_question(f: &mut fmt::Formatter<'_>, question: &Question) -> fmt::Result {
    let id = question.id();
    let input_type = question.control().input_type();

    writeln!(f, "<div class=\"question\" id=\"{}-container\">", id)?;
    writeln!(
        f,
        "<p><strong>{}. {}</strong></p>",
        question.number(),
        Escaped(question.prompt())
    )?;
    for option in question.options() {
        writeln!(
            f,
            "<label><input type=\"{}\" name=\"{}\" value=\"{}\"> {}. {}</label><br>",
            input_type,
            id,
            option.label,
            option.label,
            Escaped(&option.text)
        )?;
    }
    writeln!(f, "<p id=\"{}-feedback\" class=\"feedback\"></p>", id)?;
    writeln!(f, "</div>")
}
