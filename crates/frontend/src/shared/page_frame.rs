//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id="{entity}--{category}"` and `data-page-category` on the root
//! element, so a page found in the DOM inspector maps straight back to its
//! module (`a001_benchmark--list` lives in `domain/a001_benchmark`).

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageCategory {
    /// Table with filters and pagination
    List,
    /// A single record
    Detail,
    /// Action page that starts and tracks a server job
    Usecase,
    System,
}

impl PageCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Usecase => "usecase",
            PageCategory::System => "system",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            PageCategory::Detail => "page page--detail",
            _ => "page",
        }
    }
}

#[component]
pub fn PageFrame(
    /// `{entity}--{category}`, e.g. `"a002_control--list"`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=category.class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(PageCategory::List.as_str(), "list");
        assert_eq!(PageCategory::Detail.class(), "page page--detail");
        assert_eq!(PageCategory::Usecase.class(), "page");
    }
}
