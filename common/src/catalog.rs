//! プロジェクトカタログ
//!
//! 組み込みデータ（data/projects.json）か、ページ内のJSONから読み込む。

use crate::error::{Error, Result};
use crate::types::ProjectRecord;
use std::collections::HashSet;

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

/// 読み込み済みのプロジェクト一覧（表示順）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: Vec<ProjectRecord>,
}

impl Catalog {
    /// 組み込みカタログ
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    /// JSON配列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let projects: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::new(projects)
    }

    /// IDの重複があればエラー
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate project id: {}", project.id)));
            }
        }
        Ok(Self { projects })
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn into_projects(self) -> Vec<ProjectRecord> {
        self.projects
    }
}
