//! Static assets embedded in every quiz document.

use serde::Serialize;

use crate::grading::{CORRECT_FEEDBACK, INCORRECT_FEEDBACK, SCORE_PREFIX};

/// Feedback text handed to the grading script, shared with [`crate::grading`].
#[derive(Debug, Serialize)]
pub struct Messages {
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub score: &'static str,
}

pub const MESSAGES: Messages = Messages {
    correct: CORRECT_FEEDBACK,
    incorrect: INCORRECT_FEEDBACK,
    score: SCORE_PREFIX,
};

pub const STYLE: &str = r#"body { font-family: Arial, sans-serif; padding: 20px; max-width: 800px; margin: auto; }
.question { margin-bottom: 20px; }
.summary { font-weight: bold; font-size: 1.2em; }
.correct { color: green; }
.incorrect { color: red; }
.feedback { font-style: italic; margin-top: 5px; }"#;

/// Grades the form on every submit click.
///
/// The answer key and feedback text are read once from the `answer-key` and
/// `quiz-messages` data islands and passed into `grade`; nothing is stored on
/// `window`.
pub const GRADING_SCRIPT: &str = r#"(function () {
    "use strict";

    function canonical(labels) {
        return labels.slice().sort().join("");
    }

    function grade(answerKey, messages) {
        const ids = Object.keys(answerKey);
        let score = 0;

        for (const id of ids) {
            const correct = answerKey[id];
            const selected = Array.from(
                document.querySelectorAll("input[name='" + id + "']:checked"),
                (input) => input.value
            );

            const feedback = document.getElementById(id + "-feedback");
            if (canonical(selected) === canonical(correct)) {
                score++;
                feedback.innerText = messages.correct;
                feedback.className = "feedback correct";
            } else {
                feedback.innerText = messages.incorrect + correct.join(", ");
                feedback.className = "feedback incorrect";
            }
        }

        document.getElementById("result").innerText =
            messages.score + score + " / " + ids.length;
    }

    function readIsland(id) {
        return JSON.parse(document.getElementById(id).textContent);
    }

    const answerKey = readIsland("answer-key");
    const messages = readIsland("quiz-messages");
    document.getElementById("submit").addEventListener("click", function () {
        grade(answerKey, messages);
    });
})();"#;
