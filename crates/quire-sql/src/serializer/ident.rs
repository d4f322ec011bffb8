use super::{Formatter, Params, ToSql};

pub(super) struct Ident<S>(pub(super) S);

/// Words that cannot appear as bare identifiers in any supported flavor.
const RESERVED: &[&str] = &[
    "all", "and", "as", "asc", "by", "desc", "distinct", "from", "group", "limit", "offset", "on",
    "or", "order", "select", "table", "union", "user", "where",
];

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        let name = self.0.as_ref();

        if is_bare(name) {
            f.dst.push_str(name);
            return;
        }

        let quote = if f.serializer.is_mysql() { '`' } else { '"' };

        f.dst.push(quote);
        for ch in name.chars() {
            if ch == quote {
                f.dst.push(quote);
            }
            f.dst.push(ch);
        }
        f.dst.push(quote);
    }
}

fn is_bare(name: &str) -> bool {
    let mut chars = name.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_lowercase() || first == '_')
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
        && !RESERVED.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::is_bare;

    #[test]
    fn bare_identifiers() {
        assert!(is_bare("users"));
        assert!(is_bare("_tmp1"));
        assert!(!is_bare("Users"));
        assert!(!is_bare("first name"));
        assert!(!is_bare("1st"));
        assert!(!is_bare("order"));
        assert!(!is_bare(""));
    }
}
