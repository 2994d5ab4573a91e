//! Minimal name inflection for association labels.

/// `OrderItem` -> `order_item`, `Admin::User` -> `admin/user`
pub fn underscore(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for (i, segment) in name.split("::").enumerate() {
        if i > 0 {
            out.push('/');
            prev_lower = false;
        }
        for c in segment.chars() {
            if c.is_ascii_uppercase() {
                if prev_lower {
                    out.push('_');
                }
                out.push(c.to_ascii_lowercase());
                prev_lower = false;
            } else {
                out.push(c);
                prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
            }
        }
    }
    out
}

/// `order_item` -> `OrderItem`, `admin/user` -> `Admin::User`
pub fn camelize(name: &str) -> String {
    name.split('/')
        .map(|segment| {
            segment
                .split('_')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                        None => String::new(),
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("::")
}

/// English singular for the common plural endings.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    for suffix in ["sses", "shes", "ches", "xes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if word.ends_with("ss") || word.ends_with("us") {
        return word.to_string();
    }
    word.strip_suffix('s').unwrap_or(word).to_string()
}

/// Class name an association named `name` points to by convention.
pub fn class_name_for(name: &str) -> String {
    camelize(&singularize(name))
}

/// Canonical spelling of a class name.
pub fn normalize_class_name(class_name: &str) -> String {
    camelize(&singularize(&underscore(class_name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underscore() {
        assert_eq!(underscore("OrderItem"), "order_item");
        assert_eq!(underscore("Admin::User"), "admin/user");
        assert_eq!(underscore("user"), "user");
    }

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("order_item"), "OrderItem");
        assert_eq!(camelize("admin/user"), "Admin::User");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("orders"), "order");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("user"), "user");
    }

    #[test]
    fn test_class_names() {
        assert_eq!(class_name_for("line_items"), "LineItem");
        assert_eq!(normalize_class_name("Categories"), "Category");
        assert_eq!(normalize_class_name("Admin::User"), "Admin::User");
    }
}
