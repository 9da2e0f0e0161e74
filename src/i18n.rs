//! User-facing strings in English and Simplified Chinese.

use std::fmt;

/// Display languages with a message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    ZhCn,
}

impl Locale {
    /// Map a language tag (`zh_CN.UTF-8`, `zh-tw`, `en_US`, ...) to a catalog.
    /// Anything starting with `zh` selects Chinese, everything else English.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("zh") {
            Self::ZhCn
        } else {
            Self::En
        }
    }

    /// Resolve the display language: explicit flag, then configured value,
    /// then the usual POSIX locale variables.
    pub fn detect(explicit: Option<&str>, configured: Option<&str>) -> Self {
        explicit
            .or(configured)
            .map(str::to_string)
            .or_else(|| {
                ["LC_ALL", "LC_MESSAGES", "LANG"]
                    .iter()
                    .filter_map(|k| std::env::var(k).ok())
                    .find(|v| !v.trim().is_empty())
            })
            .map_or(Self::En, |tag| Self::from_tag(&tag))
    }
}

/// Every message the tool prints. Variants with fields are templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    PatchGenerated { file: String },
    PatchFullGenerated { file: String },
    PatchFailed { detail: Option<String> },
    PatchEmpty,
    NotGitRepo,
    CommitNotExist,
    NoWorkspace,
    NoTab,
    ParseCommitFail,
    GetFilePathFail,
    GetWorkspaceFail,
    NoCommit,
    InputCommitId,
    InputCommitIdPlaceholder,
    InputCommitIdInvalid,
    InputCommitIdShort,
}

impl Message {
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.en(),
            Locale::ZhCn => self.zh_cn(),
        }
    }

    fn en(&self) -> String {
        match self {
            Self::PatchGenerated { file } => format!("Patch file generated: {file}"),
            Self::PatchFullGenerated { file } => format!("Full patch file generated: {file}"),
            Self::PatchFailed { detail: None } => "Failed to generate patch".into(),
            Self::PatchFailed {
                detail: Some(detail),
            } => format!("Failed to generate patch: {detail}"),
            Self::PatchEmpty => "Generated patch is empty, please check commit id".into(),
            Self::NotGitRepo => "Not a Git repository".into(),
            Self::CommitNotExist => "Commit does not exist".into(),
            Self::NoWorkspace => "No workspace opened.".into(),
            Self::NoTab => "Failed to get current tab info.".into(),
            Self::ParseCommitFail => "Failed to parse commit hash from tab.".into(),
            Self::GetFilePathFail => "Failed to get diff file path.".into(),
            Self::GetWorkspaceFail => "Failed to locate workspace.".into(),
            Self::NoCommit => "No commit id provided.".into(),
            Self::InputCommitId => "Please enter commit id".into(),
            Self::InputCommitIdPlaceholder => "e.g. 24a2f307".into(),
            Self::InputCommitIdInvalid => "Please enter a valid commit id".into(),
            Self::InputCommitIdShort => "Please enter at least 7 characters for commit id".into(),
        }
    }

    fn zh_cn(&self) -> String {
        match self {
            Self::PatchGenerated { file } => format!("Patch 文件已生成: {file}"),
            Self::PatchFullGenerated { file } => format!("完整 Patch 文件已生成: {file}"),
            Self::PatchFailed { detail: None } => "生成 patch 失败".into(),
            Self::PatchFailed {
                detail: Some(detail),
            } => format!("生成 patch 失败: {detail}"),
            Self::PatchEmpty => "生成的 patch 为空，请检查 commit id".into(),
            Self::NotGitRepo => "不是 Git 仓库".into(),
            Self::CommitNotExist => "commit 不存在".into(),
            Self::NoWorkspace => "未打开任何工作区。".into(),
            Self::NoTab => "未能获取当前标签信息。".into(),
            Self::ParseCommitFail => "未能从标签解析出 commit 哈希。".into(),
            Self::GetFilePathFail => "未能获取对比文件路径。".into(),
            Self::GetWorkspaceFail => "未能定位到工作区。".into(),
            Self::NoCommit => "未提供 commit id。".into(),
            Self::InputCommitId => "请输入 commit id".into(),
            Self::InputCommitIdPlaceholder => "例如: 24a2f307".into(),
            Self::InputCommitIdInvalid => "请输入有效的 commit id".into(),
            Self::InputCommitIdShort => "请输入至少7位 commit id".into(),
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.en())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zh_prefix_selects_chinese() {
        assert_eq!(Locale::from_tag("zh-cn"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("ZH"), Locale::ZhCn);
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Locale::En);
        assert_eq!(Locale::from_tag("ja"), Locale::En);
        assert_eq!(Locale::from_tag(""), Locale::En);
    }

    #[test]
    fn explicit_wins_over_configured() {
        assert_eq!(Locale::detect(Some("en"), Some("zh-cn")), Locale::En);
        assert_eq!(Locale::detect(None, Some("zh-cn")), Locale::ZhCn);
    }

    #[test]
    fn templates_fill_arguments() {
        let m = Message::PatchGenerated {
            file: "foo.css.24a2f307_22d1bfc7.patch".into(),
        };
        assert_eq!(
            m.render(Locale::En),
            "Patch file generated: foo.css.24a2f307_22d1bfc7.patch"
        );
        assert_eq!(
            m.render(Locale::ZhCn),
            "Patch 文件已生成: foo.css.24a2f307_22d1bfc7.patch"
        );
    }

    #[test]
    fn failure_detail_is_appended() {
        let m = Message::PatchFailed {
            detail: Some("exit status 128".into()),
        };
        assert_eq!(m.render(Locale::En), "Failed to generate patch: exit status 128");
        assert_eq!(
            Message::PatchFailed { detail: None }.render(Locale::ZhCn),
            "生成 patch 失败"
        );
    }
}
