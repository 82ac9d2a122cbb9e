use crate::core::frequency::OrderedCounter;

/// Exact-match token counts (case and punctuation sensitive).
pub fn count_words<I, S>(words: I) -> OrderedCounter<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    words.into_iter().map(Into::into).collect()
}
