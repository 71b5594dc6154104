//! LoggerRegistry 与 Loggable 的集成测试

use logtree::cfg::TypeOptions;
use logtree::log::{
    global_registry, LogError, Loggable, LoggerNode, LoggerNodeConfig, LoggerRegistry,
    LoggerRegistryConfig,
};
use serial_test::serial;
use std::sync::{Arc, Barrier};
use std::thread;

fn quiet_config(name: &str) -> LoggerNodeConfig {
    LoggerNodeConfig {
        no_file_logging: true,
        console_appender: TypeOptions::of("NullAppender"),
        ..LoggerNodeConfig::named(name)
    }
}

// ============================================================================
// 全局注册表
// ============================================================================

#[test]
#[serial]
fn test_global_registry_singleton_per_name() -> Result<(), LogError> {
    let first = global_registry().get_or_create(quiet_config("Global"))?;
    let second = global_registry().get_or_create(quiet_config("Global"))?;
    assert!(Arc::ptr_eq(&first, &second));

    let child = first.get_child("worker")?;
    assert!(Arc::ptr_eq(&global_registry().get("Global.worker").unwrap(), &child));

    global_registry().remove("Global.worker");
    global_registry().remove("Global");
    assert!(!global_registry().contains("Global"));
    Ok(())
}

#[test]
#[serial]
fn test_global_registry_clone_shares_map() -> Result<(), LogError> {
    let handle = global_registry().clone();
    let node = handle.get_or_create(quiet_config("Shared"))?;
    assert!(Arc::ptr_eq(&global_registry().get("Shared").unwrap(), &node));
    handle.remove("Shared");
    Ok(())
}

#[test]
fn test_concurrent_first_creation() {
    const THREADS: usize = 8;

    let registry = LoggerRegistry::new();
    let barrier = Arc::new(Barrier::new(THREADS));

    let nodes: Vec<Arc<LoggerNode>> = (0..THREADS)
        .map(|_| {
            let registry = registry.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_create(quiet_config("Race")).unwrap()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(registry.len(), 1);
    assert!(nodes.iter().all(|node| Arc::ptr_eq(node, &nodes[0])));
}

#[test]
fn test_concurrent_get_child() -> Result<(), LogError> {
    const THREADS: usize = 8;

    let registry = LoggerRegistry::new();
    let root = registry.get_or_create(quiet_config("App"))?;
    let barrier = Arc::new(Barrier::new(THREADS));

    let children: Vec<Arc<LoggerNode>> = (0..THREADS)
        .map(|_| {
            let root = root.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                root.get_child("x").unwrap()
            })
        })
        .collect::<Vec<_>>()
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    assert_eq!(root.get_child_names(), vec!["App.x"]);
    assert!(children.iter().all(|child| Arc::ptr_eq(child, &children[0])));
    assert_eq!(registry.names(), vec!["App", "App.x"]);
    Ok(())
}

// ============================================================================
// 配置
// ============================================================================

#[test]
fn test_from_yaml_config() -> Result<(), LogError> {
    let config = LoggerRegistryConfig::from_yaml(
        r#"
loggers:
  - name: Service.http
    parent: Service
    no_file_logging: true
    console_appender:
      type: NullAppender
  - name: Service
    console_level: 30
    file_level: internal
    no_file_logging: true
    console_appender:
      type: NullAppender
"#,
    )?;

    let registry = LoggerRegistry::from_config(config)?;
    let service = registry.get("Service").unwrap();
    let http = registry.get("Service.http").unwrap();

    assert_eq!(service.console_level_name(), "warning");
    assert_eq!(service.file_level_name(), "internal");
    assert_eq!(http.local_name(), "http");
    assert_eq!(service.get_child_names(), vec!["Service.http"]);
    // 从配置创建的子节点使用自己的级别
    assert_eq!(http.console_level_name(), "info");
    Ok(())
}

#[test]
fn test_config_child_of_started_parent_starts() -> Result<(), LogError> {
    let registry = LoggerRegistry::new();
    let root = registry.get_or_create(quiet_config("App"))?;
    root.start()?;

    let child = registry.get_or_create(LoggerNodeConfig {
        parent: Some("App".to_string()),
        ..quiet_config("App.late")
    })?;
    assert!(child.is_started());
    Ok(())
}

#[test]
fn test_from_config_missing_parent() -> Result<(), LogError> {
    let config = LoggerRegistryConfig::from_toml(
        r#"
[[loggers]]
name = "Orphan"
parent = "Nobody"
"#,
    )?;
    let result = LoggerRegistry::from_config(config);
    match result {
        Err(LogError::AmbiguousParent(message)) => assert!(message.contains("Orphan -> Nobody")),
        Err(other) => panic!("unexpected error {}", other),
        Ok(_) => panic!("orphan should not resolve"),
    }
    Ok(())
}

// ============================================================================
// Loggable
// ============================================================================

struct Downloader {
    log: Arc<LoggerNode>,
}

impl Downloader {
    fn new(registry: &LoggerRegistry) -> Result<Self, LogError> {
        let log = registry.get_or_create(quiet_config("Downloader"))?;
        Ok(Self { log })
    }

    fn fetch(&self) -> Result<Arc<LoggerNode>, LogError> {
        let log = self.method_logger("fetch")?;
        log.debug("fetching")?;
        Ok(log)
    }

    fn spawn_worker(&self) -> Result<Arc<LoggerNode>, LogError> {
        self.create_child_logger(self, "worker")
    }
}

impl Loggable for Downloader {
    fn log_device(&self) -> &Arc<LoggerNode> {
        &self.log
    }
}

#[test]
fn test_loggable_capability() -> Result<(), LogError> {
    let registry = LoggerRegistry::new();
    let downloader = Downloader::new(&registry)?;

    let fetch = downloader.fetch()?;
    assert_eq!(fetch.name(), "Downloader:fetch");
    assert!(registry.contains("Downloader:fetch"));

    let worker = downloader.spawn_worker()?;
    assert_eq!(worker.name(), "Downloader.worker");

    let denied = downloader.create_child_logger(&registry, "intruder");
    assert!(matches!(denied, Err(LogError::PermissionDenied(_))));
    assert!(!registry.contains("Downloader.intruder"));
    Ok(())
}
