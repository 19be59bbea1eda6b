//! Categorical keys of textual labels

use serde::{Deserialize, Serialize};

/// Dense mapping between label texts and the class indices used by the classifiers
///
/// Key `k` is the `k`-th label in lexicographic order of the training labels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LabelKeys {
    labels: Vec<String>,
}

impl LabelKeys {
    pub fn fit<I, L>(labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut labels: Vec<String> = labels
            .into_iter()
            .map(|l| l.as_ref().to_string())
            .collect();
        labels.sort();
        labels.dedup();

        LabelKeys { labels }
    }

    pub fn key(&self, label: &str) -> Option<usize> {
        self.labels
            .binary_search_by(|l| l.as_str().cmp(label))
            .ok()
    }

    pub fn label(&self, key: usize) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[cfg(test)]
mod tests {
    use super::LabelKeys;

    #[test]
    fn keys_follow_sorted_order() {
        let keys = LabelKeys::fit(&["6", "5", "7", "5"]);
        assert_eq!(keys.labels(), &["5", "6", "7"]);
        assert_eq!(keys.key("7"), Some(2));
        assert_eq!(keys.key("9"), None);
        assert_eq!(keys.label(0), Some("5"));
        assert_eq!(keys.label(3), None);
    }
}
