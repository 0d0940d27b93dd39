/// A display name split the way the identity provider wants it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName {
    pub first: String,
    pub last: String,
}

impl PersonName {
    /// Split on the first space. Everything after it is the last name,
    /// so "Mary Ann Evans" becomes ("Mary", "Ann Evans"). A single token
    /// yields an empty last name.
    pub fn split(name: &str) -> Self {
        match name.split_once(' ') {
            Some((first, last)) => Self {
                first: first.to_string(),
                last: last.to_string(),
            },
            None => Self {
                first: name.to_string(),
                last: String::new(),
            },
        }
    }
}
