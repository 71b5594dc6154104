use crate::log::announcement::Announcement;
use crate::log::config::{default_log_dir, LoggerNodeConfig, LoggerRegistryConfig};
use crate::log::error::LogError;
use crate::log::node::{LoggerNode, NodeInit, NodeMap, NodeSettings};
use garde::Validate;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Logger 注册表
///
/// 名称 -> 节点的映射，保证同一个注册表中每个名称只有一个节点。
/// clone 得到的句柄共享同一份映射；测试可以各自创建独立的注册表。
#[derive(Clone)]
pub struct LoggerRegistry {
    nodes: Arc<NodeMap>,
    default_log_dir: Arc<PathBuf>,
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerRegistry {
    /// 使用默认日志目录创建空注册表
    pub fn new() -> Self {
        Self::with_log_dir(default_log_dir())
    }

    /// 未指定 `file_path` 的节点把日志写到 `dir/<file_name>`
    pub fn with_log_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            nodes: Arc::new(RwLock::new(HashMap::new())),
            default_log_dir: Arc::new(dir.into()),
        }
    }

    /// 按配置一次性创建整棵树
    ///
    /// 父节点可以在列表中出现在子节点之后；无法解析的父节点返回 AmbiguousParent。
    pub fn from_config(config: LoggerRegistryConfig) -> Result<Self, LogError> {
        let registry = match config.default_log_dir {
            Some(dir) => Self::with_log_dir(dir),
            None => Self::new(),
        };

        let mut pending = config.loggers;
        while !pending.is_empty() {
            let (ready, waiting): (Vec<_>, Vec<_>) = pending.into_iter().partition(|c| {
                c.parent
                    .as_deref()
                    .map_or(true, |parent| registry.contains(parent))
            });

            if ready.is_empty() {
                let unresolved: Vec<String> = waiting
                    .iter()
                    .map(|c| format!("{} -> {}", c.name, c.parent.as_deref().unwrap_or_default()))
                    .collect();
                return Err(LogError::AmbiguousParent(unresolved.join(", ")));
            }

            for node_config in ready {
                registry.get_or_create(node_config)?;
            }
            pending = waiting;
        }

        Ok(registry)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Arc<LoggerNode>>> {
        self.nodes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Arc<LoggerNode>>> {
        self.nodes.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn default_log_dir(&self) -> &Path {
        &self.default_log_dir
    }

    /// 按名称获取节点，不存在时创建
    ///
    /// 名称已存在时直接返回已有节点，`config` 中的其余字段被忽略。
    /// `parent` 必须是本注册表中已存在的节点，且名称以 `<parent>.` 或 `<parent>:` 开头。
    pub fn get_or_create(&self, config: LoggerNodeConfig) -> Result<Arc<LoggerNode>, LogError> {
        if let Some(node) = self.get(&config.name) {
            return Ok(node);
        }

        config.validate()?;
        let console_level = config.console_level.resolve()?;
        let file_level = config.file_level.resolve()?;
        let announcement_level = config.announcement_level.resolve()?;

        let (node, parent) = {
            let mut nodes = self.write();
            if let Some(node) = nodes.get(&config.name) {
                return Ok(node.clone());
            }

            let parent = match &config.parent {
                Some(parent_name) => Some(nodes.get(parent_name).cloned().ok_or_else(|| {
                    LogError::AmbiguousParent(format!(
                        "{} -> {} (parent not registered)",
                        config.name, parent_name
                    ))
                })?),
                None => None,
            };

            // 子节点名称必须是 `<parent>.<local>` 或 `<parent>:<local>`
            let local_name = match &parent {
                Some(p) => config
                    .name
                    .strip_prefix(p.name())
                    .and_then(|rest| rest.strip_prefix(['.', ':']))
                    .filter(|rest| !rest.is_empty())
                    .ok_or_else(|| {
                        LogError::InvalidConfig(format!(
                            "logger name {} is not a child name of {}",
                            config.name,
                            p.name()
                        ))
                    })?,
                None => config.name.as_str(),
            }
            .to_string();

            let node = LoggerNode::new(NodeInit {
                name: config.name.clone(),
                local_name,
                parent: parent.clone(),
                registry: Arc::downgrade(&self.nodes),
                settings: Arc::new(NodeSettings {
                    console_formatter: config.console_formatter.clone(),
                    file_formatter: config.file_formatter.clone(),
                    console_appender: config.console_appender.clone(),
                }),
                console_level,
                file_level,
                file_path: config.resolve_file_path(&self.default_log_dir),
                no_file_logging: config.no_file_logging,
                announcement: Announcement::new(
                    config.init_announcement_template.clone(),
                    announcement_level,
                ),
                handlers: None,
            });

            // 锁顺序：注册表 -> 节点
            if let Some(parent) = &parent {
                parent.attach_child(node.clone());
            }
            nodes.insert(config.name.clone(), node.clone());
            (node, parent)
        };

        node.internal("Initializing logger")?;
        if config.announce_on_init {
            node.announce()?;
        }
        if config.auto_start || parent.is_some_and(|p| p.is_started()) {
            node.start()?;
        }

        Ok(node)
    }

    pub fn get(&self, name: &str) -> Option<Arc<LoggerNode>> {
        self.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// 全部节点名称（已排序）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// 从注册表和父节点中移除，不会关闭节点，也不影响它的子节点
    pub fn remove(&self, name: &str) -> Option<Arc<LoggerNode>> {
        let mut nodes = self.write();
        let node = nodes.remove(name)?;
        if let Some(parent) = node.parent() {
            parent.detach_child(&node);
        }
        Some(node)
    }

    /// 启动全部根节点（子节点随父节点启动）
    pub fn start_all(&self) -> Result<(), LogError> {
        let roots: Vec<_> = self
            .read()
            .values()
            .filter(|node| node.parent().is_none())
            .cloned()
            .collect();

        let mut first_error = None;
        for node in roots {
            if let Err(err) = node.start() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// 关闭全部节点
    pub fn close_all(&self) -> Result<(), LogError> {
        let nodes: Vec<_> = self.read().values().cloned().collect();

        let mut first_error = None;
        for node in nodes {
            if let Err(err) = node.close() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

static GLOBAL_REGISTRY: Lazy<LoggerRegistry> = Lazy::new(LoggerRegistry::new);

/// 进程级的默认注册表
pub fn global_registry() -> &'static LoggerRegistry {
    &GLOBAL_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cfg::TypeOptions;
    use tempfile::TempDir;

    fn quiet_config(name: &str) -> LoggerNodeConfig {
        LoggerNodeConfig {
            no_file_logging: true,
            console_appender: TypeOptions::of("NullAppender"),
            ..LoggerNodeConfig::named(name)
        }
    }

    #[test]
    fn test_get_or_create_is_singleton_per_name() -> Result<(), LogError> {
        let registry = LoggerRegistry::new();
        let first = registry.get_or_create(quiet_config("App"))?;
        let second = registry.get_or_create(LoggerNodeConfig {
            console_level: "error".into(),
            ..quiet_config("App")
        })?;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.console_level_name(), "info");
        assert_eq!(registry.len(), 1);
        Ok(())
    }

    #[test]
    fn test_isolated_registries() -> Result<(), LogError> {
        let a = LoggerRegistry::new();
        let b = LoggerRegistry::new();
        let node_a = a.get_or_create(quiet_config("App"))?;
        let node_b = b.get_or_create(quiet_config("App"))?;
        assert!(!Arc::ptr_eq(&node_a, &node_b));
        Ok(())
    }

    #[test]
    fn test_invalid_level_rejected() {
        let registry = LoggerRegistry::new();
        let result = registry.get_or_create(LoggerNodeConfig {
            console_level: "loud".into(),
            ..quiet_config("App")
        });
        assert!(matches!(result, Err(LogError::InvalidLevel(_))));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_invalid_name_rejected() {
        let registry = LoggerRegistry::new();
        let result = registry.get_or_create(quiet_config(""));
        assert!(matches!(result, Err(LogError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_parent() {
        let registry = LoggerRegistry::new();
        let result = registry.get_or_create(LoggerNodeConfig {
            parent: Some("Missing".to_string()),
            ..quiet_config("App.db")
        });
        assert!(matches!(result, Err(LogError::AmbiguousParent(_))));
    }

    #[test]
    fn test_explicit_parent_links_tree() -> Result<(), LogError> {
        let registry = LoggerRegistry::new();
        let root = registry.get_or_create(quiet_config("App"))?;
        let db = registry.get_or_create(LoggerNodeConfig {
            parent: Some("App".to_string()),
            ..quiet_config("App.db")
        })?;

        assert_eq!(db.local_name(), "db");
        assert!(Arc::ptr_eq(&db.parent().unwrap(), &root));
        assert_eq!(root.get_child_names(), vec!["App.db"]);

        // get_child 找到同名节点时复用
        let again = root.get_child("db")?;
        assert!(Arc::ptr_eq(&again, &db));
        Ok(())
    }

    #[test]
    fn test_parent_must_prefix_child_name() -> Result<(), LogError> {
        let registry = LoggerRegistry::new();
        registry.get_or_create(quiet_config("App"))?;

        for name in ["Other", "Application.db", "App.", "App"] {
            let result = registry.get_or_create(LoggerNodeConfig {
                parent: Some("App".to_string()),
                ..quiet_config(name)
            });
            if name == "App" {
                // 已存在的名称直接返回
                assert!(result?.parent().is_none());
            } else {
                assert!(matches!(result, Err(LogError::InvalidConfig(_))), "{}", name);
                assert!(!registry.contains(name));
            }
        }

        let method = registry.get_or_create(LoggerNodeConfig {
            parent: Some("App".to_string()),
            ..quiet_config("App:run")
        })?;
        assert_eq!(method.local_name(), "run");
        Ok(())
    }

    #[test]
    fn test_get_child_registers_node() -> Result<(), LogError> {
        let registry = LoggerRegistry::new();
        let root = registry.get_or_create(quiet_config("App"))?;
        let child = root.get_child("net")?;

        assert!(registry.contains("App.net"));
        assert!(Arc::ptr_eq(&registry.get("App.net").unwrap(), &child));
        assert_eq!(registry.names(), vec!["App", "App.net"]);
        Ok(())
    }

    #[test]
    fn test_remove() -> Result<(), LogError> {
        let registry = LoggerRegistry::new();
        let root = registry.get_or_create(quiet_config("App"))?;
        root.get_child("db")?;

        let removed = registry.remove("App.db");
        assert!(removed.is_some());
        assert!(!registry.contains("App.db"));
        assert!(root.get_child_names().is_empty());
        assert!(registry.remove("App.db").is_none());
        Ok(())
    }

    #[test]
    fn test_from_config_out_of_order() -> Result<(), LogError> {
        let dir = TempDir::new()?;
        let config = LoggerRegistryConfig::from_json(&format!(
            r#"{{
                default_log_dir: "{}",
                loggers: [
                    {{ name: "App.db.pool", parent: "App.db", console_appender: {{ type: "NullAppender" }} }},
                    {{ name: "App.db", parent: "App", console_appender: {{ type: "NullAppender" }} }},
                    {{ name: "App", console_level: "warning", console_appender: {{ type: "NullAppender" }} }},
                ],
            }}"#,
            dir.path().display()
        ))?;

        let registry = LoggerRegistry::from_config(config)?;
        assert_eq!(registry.names(), vec!["App", "App.db", "App.db.pool"]);
        assert_eq!(registry.get("App").unwrap().console_level_name(), "warning");
        assert_eq!(
            registry.get("App.db.pool").unwrap().file_path(),
            dir.path().join("app.log")
        );

        registry.start_all()?;
        assert!(registry.get("App.db.pool").unwrap().is_started());
        registry.close_all()?;
        assert!(registry.get("App").unwrap().is_closed());
        Ok(())
    }

    #[test]
    fn test_from_config_unresolvable_parent() -> Result<(), LogError> {
        let config = LoggerRegistryConfig::from_json(
            r#"{ loggers: [ { name: "A", parent: "B" }, { name: "B", parent: "A" } ] }"#,
        )?;
        let result = LoggerRegistry::from_config(config);
        assert!(matches!(result, Err(LogError::AmbiguousParent(_))));
        Ok(())
    }

    #[test]
    fn test_global_registry_is_shared() {
        assert!(std::ptr::eq(global_registry(), global_registry()));
    }
}
