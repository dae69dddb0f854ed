use indexmap::IndexMap;

/// Response headers in the order they were produced.
pub type Headers = IndexMap<String, String>;

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::with_estimate(0)
    }

    pub(crate) fn with_estimate(estimate: usize) -> Self {
        Self {
            headers: IndexMap::with_capacity(estimate),
        }
    }

    /// Inserts `name`, replacing the value of an existing entry whose name
    /// differs only in ASCII case while keeping its position.
    pub(crate) fn push<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .keys()
            .position(|existing| existing.eq_ignore_ascii_case(&name))
        {
            Some(index) => {
                if let Some((_, slot)) = self.headers.get_index_mut(index) {
                    *slot = value;
                }
            }
            None => {
                self.headers.insert(name, value);
            }
        }
    }

    pub(crate) fn extend(&mut self, other: HeaderCollection) {
        for (name, value) in other.headers {
            self.push(name, value);
        }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.headers.len()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
