//! Shoutout formatting: one Markdown list item per eligible pull request.

use crate::contract::PullRequestRecord;

/// Render `pr` as `- [@login](author_url): [title](pr_url)`.
pub fn format_shoutout(pr: &PullRequestRecord) -> String {
    format!(
        "- [@{}]({}): [{}]({})",
        pr.author_login, pr.author_url, pr.title, pr.url
    )
}
