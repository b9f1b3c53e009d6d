//! Prompt construction for the generative API.
//!
//! Pure string formatting: the instruction fixes the question count, the
//! true/false constraint, and the exact output line format the response
//! parser expects.

/// Build the generation instruction for `num_questions` questions over
/// `text`, embedding the text verbatim at the end.
pub fn build_prompt(text: &str, num_questions: usize) -> String {
    format!(
        "You are an expert assistant that writes quiz questions from the provided \
content. Your goal is to create questions that are extremely difficult and \
challenging, requiring a deep and careful reading of the text. The questions must be:

- Original: avoid repeating ideas or phrases from the text in an obvious way.
- Very difficult: questions should demand inference, detailed analysis, and \
attention to nuance. Some should focus on subtle details or implicit information.
- Highly deceptive: false statements must be extremely plausible. Alterations in \
false statements should be very subtle and almost imperceptible on a quick read, \
using synonyms, paraphrases, minor numeric changes, or shifts in subtle \
relationships such as cause and effect or chronological order.

Instructions:
- Generate exactly {num_questions} questions.
- Every question must be answerable as TRUE or FALSE.
- Each question must be based on specific details of the provided text, but \
phrased so it is not a direct copy.
- Include a mix of true and false questions.
- For false questions, alter key information from the text very subtly so they \
look true at first glance but are incorrect under extremely careful analysis.
- Do not use question marks (? or ¿) in the questions.
- Provide an answer for each question, indicating \"True\" or \"False\".
- Output one question per line, numbered, in exactly this format:

1. First statement - True
2. Second statement - False
3. Third statement - True
...

Text:
{text}"
    )
}
