use crate::cfg::TypeOptions;
use crate::log::announcement::{Announcement, ROOT_PARENT_NAME};
use crate::log::appender::{
    create_appender_from_options, register_appenders, FileAppender, LogAppender,
};
use crate::log::buffer::BufferingSink;
use crate::log::error::LogError;
use crate::log::formatter::{create_formatter_from_options, register_formatters, LogFormatter};
use crate::log::handler::{Handler, HandlerSet};
use crate::log::level::{LevelValue, LogLevel};
use crate::log::log_record::LogRecord;
use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, Once, PoisonError, RwLock, Weak};
use std::time::Instant;

/// 注册表内部的名称 -> 节点映射
pub(crate) type NodeMap = RwLock<HashMap<String, Arc<LoggerNode>>>;

/// 注册所有日志组件（只执行一次）
static REGISTER_ONCE: Once = Once::new();

fn ensure_components_registered() {
    REGISTER_ONCE.call_once(|| {
        let _ = register_formatters();
        let _ = register_appenders();
    });
}

/// 子节点的类型，决定名称中的分隔符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildKind {
    /// 普通函数或模块，分隔符 `.`
    #[default]
    Function,
    /// 实例方法，分隔符 `:`
    Method,
}

impl ChildKind {
    pub fn separator(self) -> char {
        match self {
            ChildKind::Function => '.',
            ChildKind::Method => ':',
        }
    }
}

/// `get_child_with` 的参数
#[derive(Debug, Clone, Default)]
pub struct ChildOptions {
    /// 子节点的本地名称（不含父节点前缀）
    pub name: String,
    pub kind: ChildKind,
    /// 未指定时继承父节点
    pub console_level: Option<LevelValue>,
    /// 未指定时继承父节点
    pub file_level: Option<LevelValue>,
}

impl ChildOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ChildKind::Method,
            ..Default::default()
        }
    }

    pub fn with_console_level(mut self, level: impl Into<LevelValue>) -> Self {
        self.console_level = Some(level.into());
        self
    }

    pub fn with_file_level(mut self, level: impl Into<LevelValue>) -> Self {
        self.file_level = Some(level.into());
        self
    }
}

/// `find_child_by_name` 的匹配方式
#[derive(Debug, Clone, Copy)]
pub struct FindOptions {
    pub case_sensitive: bool,
    pub exact_match: bool,
}

impl Default for FindOptions {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            exact_match: false,
        }
    }
}

/// `find_child_by_name` 的结果
#[derive(Debug, Clone)]
pub enum ChildMatch {
    /// 精确匹配到的唯一子节点
    Exact(Arc<LoggerNode>),
    /// 名称包含查询串的全部子节点，按创建顺序
    Partial(Vec<Arc<LoggerNode>>),
    NotFound,
}

impl ChildMatch {
    pub fn is_found(&self) -> bool {
        !matches!(self, ChildMatch::NotFound)
    }

    /// 结果中的全部节点
    pub fn nodes(&self) -> Vec<Arc<LoggerNode>> {
        match self {
            ChildMatch::Exact(node) => vec![node.clone()],
            ChildMatch::Partial(nodes) => nodes.clone(),
            ChildMatch::NotFound => Vec::new(),
        }
    }
}

/// 创建 handler 所需的组件配置，同一棵树中由子节点共享
#[derive(Debug, Clone)]
pub(crate) struct NodeSettings {
    pub console_formatter: TypeOptions,
    pub file_formatter: TypeOptions,
    pub console_appender: TypeOptions,
}

impl NodeSettings {
    fn build_handlers(&self, file_path: &Path, no_file_logging: bool) -> Result<HandlerSet, LogError> {
        ensure_components_registered();

        let console = Handler::new(
            Arc::from(create_formatter_from_options(&self.console_formatter)?),
            Arc::from(create_appender_from_options(&self.console_appender)?),
        );

        let file = if no_file_logging {
            None
        } else {
            Some(self.build_file_handler(file_path)?)
        };

        Ok(HandlerSet::new(Some(console), file))
    }

    fn build_file_handler(&self, file_path: &Path) -> Result<Handler, LogError> {
        Ok(Handler::new(
            self.build_file_formatter()?,
            Arc::new(FileAppender::open(file_path)?),
        ))
    }

    fn build_file_formatter(&self) -> Result<Arc<dyn LogFormatter>, LogError> {
        ensure_components_registered();
        Ok(Arc::from(create_formatter_from_options(&self.file_formatter)?))
    }
}

/// 输出状态：Buffering -> Live -> Closed，只能前进
enum SinkState {
    Buffering(BufferingSink),
    Live(HandlerSet),
    Closed,
}

struct NodeState {
    console_level: LogLevel,
    file_level: LogLevel,
    file_path: PathBuf,
    no_file_logging: bool,
    children: Vec<Arc<LoggerNode>>,
    sink: SinkState,
    started_at: Option<DateTime<Local>>,
}

/// 构造节点所需的全部参数
pub(crate) struct NodeInit {
    pub name: String,
    pub local_name: String,
    pub parent: Option<Arc<LoggerNode>>,
    pub registry: Weak<NodeMap>,
    pub settings: Arc<NodeSettings>,
    pub console_level: LogLevel,
    pub file_level: LogLevel,
    pub file_path: PathBuf,
    pub no_file_logging: bool,
    pub announcement: Announcement,
    pub handlers: Option<HandlerSet>,
}

/// logger 树中的一个节点
///
/// 节点有独立的控制台和文件级别。在 [`start`](LoggerNode::start) 之前，
/// 所有记录按到达顺序进入缓冲区；start 时按当时的级别回放，然后切换到真正的 handler。
/// 一个节点的状态由一把锁保护，emit 在持锁期间完成分发，
/// 因此切换过程中到达的记录要么被回放，要么直接输出，恰好一次。
pub struct LoggerNode {
    name: String,
    local_name: String,
    parent: Weak<LoggerNode>,
    registry: Weak<NodeMap>,
    settings: Arc<NodeSettings>,
    announcement: Announcement,
    created_at: DateTime<Local>,
    state: Mutex<NodeState>,
    call_counts: Mutex<HashMap<String, u64>>,
    warned: Mutex<HashSet<String>>,
}

impl LoggerNode {
    pub(crate) fn new(init: NodeInit) -> Arc<Self> {
        let (sink, started_at) = match init.handlers {
            Some(handlers) => (SinkState::Live(handlers), Some(Local::now())),
            None => (SinkState::Buffering(BufferingSink::new()), None),
        };

        Arc::new(Self {
            name: init.name,
            local_name: init.local_name,
            parent: init
                .parent
                .as_ref()
                .map(Arc::downgrade)
                .unwrap_or_default(),
            registry: init.registry,
            settings: init.settings,
            announcement: init.announcement,
            created_at: Local::now(),
            state: Mutex::new(NodeState {
                console_level: init.console_level,
                file_level: init.file_level,
                file_path: init.file_path,
                no_file_logging: init.no_file_logging,
                children: Vec::new(),
                sink,
                started_at,
            }),
            call_counts: Mutex::new(HashMap::new()),
            warned: Mutex::new(HashSet::new()),
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, NodeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 完整名称，例如 `App.db:query`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 不含父节点前缀的名称
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    pub fn parent(&self) -> Option<Arc<LoggerNode>> {
        self.parent.upgrade()
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn started_at(&self) -> Option<DateTime<Local>> {
        self.lock_state().started_at
    }

    pub fn is_started(&self) -> bool {
        matches!(self.lock_state().sink, SinkState::Live(_))
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.lock_state().sink, SinkState::Closed)
    }

    pub fn console_level(&self) -> LogLevel {
        self.lock_state().console_level
    }

    pub fn console_level_name(&self) -> &'static str {
        self.console_level().as_str()
    }

    pub fn file_level(&self) -> LogLevel {
        self.lock_state().file_level
    }

    pub fn file_level_name(&self) -> &'static str {
        self.file_level().as_str()
    }

    pub fn file_path(&self) -> PathBuf {
        self.lock_state().file_path.clone()
    }

    pub fn no_file_logging(&self) -> bool {
        self.lock_state().no_file_logging
    }

    // ---------------------------------------------------------------------
    // emit
    // ---------------------------------------------------------------------

    /// 以调用位置记录一条日志
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) -> Result<(), LogError> {
        self.count_call(level.as_str());
        self.log_record(LogRecord::new(level, self.name.as_str(), message))
    }

    /// 直接提交一条已构造好的记录
    ///
    /// Buffering 时无条件入队；Live 时控制台与文件按各自级别过滤；Closed 时丢弃。
    pub fn log_record(&self, record: LogRecord) -> Result<(), LogError> {
        let mut state = self.lock_state();
        let (console_level, file_level) = (state.console_level, state.file_level);
        match &mut state.sink {
            SinkState::Buffering(buffer) => {
                buffer.push(record);
                Ok(())
            }
            SinkState::Live(handlers) => Ok(handlers.dispatch(&record, console_level, file_level)?),
            SinkState::Closed => Ok(()),
        }
    }

    #[track_caller]
    pub fn internal(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Internal, message)
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    #[track_caller]
    pub fn warning(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Warning, message)
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    #[track_caller]
    pub fn critical(&self, message: impl Into<String>) -> Result<(), LogError> {
        self.log(LogLevel::Critical, message)
    }

    /// 同一条警告在该节点上只输出一次
    #[track_caller]
    pub fn warn_once(&self, message: impl Into<String>) -> Result<(), LogError> {
        let message = message.into();
        let first = self
            .warned
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(message.clone());
        if first {
            self.warning(message)
        } else {
            Ok(())
        }
    }

    /// 发出初始化公告，每个节点最多一次
    ///
    /// 返回是否真的发出了公告。
    #[track_caller]
    pub fn announce(&self) -> Result<bool, LogError> {
        if !self.announcement.try_fire() {
            return Ok(false);
        }

        let time_started = self.started_at().unwrap_or(self.created_at);
        let parent = self.parent();
        let message = self.announcement.render(
            &self.name,
            time_started,
            parent.as_ref().map(|p| p.name()),
        );
        self.log(self.announcement.level(), message)?;
        Ok(true)
    }

    pub fn has_announced(&self) -> bool {
        self.announcement.has_fired()
    }

    fn count_call(&self, method: &str) {
        *self
            .call_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(method.to_string())
            .or_insert(0) += 1;
    }

    /// 各 emit 级别和 instrument 方法被调用的次数
    pub fn call_counts(&self) -> HashMap<String, u64> {
        self.call_counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// 在方法子 logger 下执行 `f`，以 internal 级别记录进入、退出和耗时
    #[track_caller]
    pub fn instrument<R>(
        self: &Arc<Self>,
        method: &str,
        f: impl FnOnce(&Arc<LoggerNode>) -> R,
    ) -> Result<R, LogError> {
        let child = self.get_child_with(ChildOptions::method(method))?;
        self.count_call(method);

        child.internal(format!("Entering {}", method))?;
        let start_time = Instant::now();
        let result = f(&child);
        child.internal(format!(
            "Exiting {} after {}ms",
            method,
            start_time.elapsed().as_millis()
        ))?;

        Ok(result)
    }

    // ---------------------------------------------------------------------
    // 子节点
    // ---------------------------------------------------------------------

    /// 获取或创建子节点 `<name>.<child>`，幂等
    pub fn get_child(self: &Arc<Self>, name: &str) -> Result<Arc<LoggerNode>, LogError> {
        self.get_child_with(ChildOptions::new(name))
    }

    /// 获取或创建子节点
    ///
    /// 已存在时直接返回，忽略 options 中的级别。新节点继承父节点的级别（可覆盖）、
    /// 文件路径和 no_file_logging，并登记到所属注册表；父节点已启动时子节点立即进入 Live，
    /// 与父节点共享 handler。
    pub fn get_child_with(self: &Arc<Self>, options: ChildOptions) -> Result<Arc<LoggerNode>, LogError> {
        if options.name.is_empty() {
            return Err(LogError::InvalidConfig("child logger name is empty".to_string()));
        }
        let console_level = options.console_level.as_ref().map(LevelValue::resolve).transpose()?;
        let file_level = options.file_level.as_ref().map(LevelValue::resolve).transpose()?;
        let child_name = format!("{}{}{}", self.name, options.kind.separator(), options.name);

        if let Some(child) = self.child_named(&child_name) {
            return Ok(child);
        }

        // 锁顺序：注册表 -> 节点
        let registry = self.registry.upgrade();
        let mut map = registry
            .as_ref()
            .map(|r| r.write().unwrap_or_else(PoisonError::into_inner));
        let mut state = self.lock_state();

        if let Some(child) = state.children.iter().find(|c| c.name == child_name) {
            return Ok(child.clone());
        }

        if let Some(existing) = map.as_ref().and_then(|m| m.get(&child_name)).cloned() {
            if !existing.parent.upgrade().is_some_and(|p| Arc::ptr_eq(&p, self)) {
                return Err(LogError::DuplicateChild(format!(
                    "{} is registered under another parent",
                    child_name
                )));
            }
            state.children.push(existing.clone());
            return Ok(existing);
        }

        let handlers = match &state.sink {
            SinkState::Live(handlers) => Some(handlers.clone()),
            _ => None,
        };
        let child = LoggerNode::new(NodeInit {
            name: child_name.clone(),
            local_name: options.name.clone(),
            parent: Some(self.clone()),
            registry: self.registry.clone(),
            settings: self.settings.clone(),
            console_level: console_level.unwrap_or(state.console_level),
            file_level: file_level.unwrap_or(state.file_level),
            file_path: state.file_path.clone(),
            no_file_logging: state.no_file_logging,
            announcement: Announcement::new(
                self.announcement.template(),
                self.announcement.level(),
            ),
            handlers,
        });

        state.children.push(child.clone());
        if let Some(map) = map.as_mut() {
            map.insert(child_name.clone(), child.clone());
        }
        drop(state);
        drop(map);

        self.internal(format!("Created child logger {}", child_name))?;
        Ok(child)
    }

    /// 严格创建子节点，本地名称（忽略大小写）已存在时返回 DuplicateChild
    pub fn add_child(self: &Arc<Self>, name: &str) -> Result<Arc<LoggerNode>, LogError> {
        let lowered = name.to_lowercase();
        let duplicate = self
            .lock_state()
            .children
            .iter()
            .any(|child| child.local_name.to_lowercase() == lowered);
        if duplicate {
            return Err(LogError::DuplicateChild(format!("{} under {}", name, self.name)));
        }
        self.get_child(name)
    }

    fn child_named(&self, name: &str) -> Option<Arc<LoggerNode>> {
        self.lock_state()
            .children
            .iter()
            .find(|child| child.name == name)
            .cloned()
    }

    pub(crate) fn attach_child(&self, child: Arc<LoggerNode>) {
        let mut state = self.lock_state();
        if !state.children.iter().any(|c| Arc::ptr_eq(c, &child)) {
            state.children.push(child);
        }
    }

    pub(crate) fn detach_child(&self, child: &Arc<LoggerNode>) {
        self.lock_state().children.retain(|c| !Arc::ptr_eq(c, child));
    }

    /// 直接子节点，按创建顺序
    pub fn children(&self) -> Vec<Arc<LoggerNode>> {
        self.lock_state().children.clone()
    }

    /// 直接子节点的完整名称
    pub fn get_child_names(&self) -> Vec<String> {
        self.lock_state()
            .children
            .iter()
            .map(|child| child.name.clone())
            .collect()
    }

    /// 全部后代，广度优先
    pub fn descendants(&self) -> Vec<Arc<LoggerNode>> {
        let mut result = Vec::new();
        let mut queue: VecDeque<Arc<LoggerNode>> = self.children().into();
        while let Some(node) = queue.pop_front() {
            queue.extend(node.children());
            result.push(node);
        }
        result
    }

    /// 在直接子节点中按本地名称查找
    ///
    /// 精确匹配同时接受完整名称；非精确匹配返回本地名称包含 `name` 的全部子节点。
    pub fn find_child_by_name(&self, name: &str, options: FindOptions) -> ChildMatch {
        let fold = |s: &str| {
            if options.case_sensitive {
                s.to_string()
            } else {
                s.to_lowercase()
            }
        };
        let needle = fold(name);
        let children = self.children();

        if options.exact_match {
            return children
                .into_iter()
                .find(|child| fold(&child.local_name) == needle || fold(&child.name) == needle)
                .map(ChildMatch::Exact)
                .unwrap_or(ChildMatch::NotFound);
        }

        let matches: Vec<_> = children
            .into_iter()
            .filter(|child| fold(&child.local_name).contains(&needle))
            .collect();
        if matches.is_empty() {
            ChildMatch::NotFound
        } else {
            ChildMatch::Partial(matches)
        }
    }

    // ---------------------------------------------------------------------
    // 级别
    // ---------------------------------------------------------------------

    /// 设置级别并级联到全部后代
    ///
    /// 先校验两个值，任一无效则什么都不改。子节点自己设置过的级别也会被覆盖。
    pub fn set_level(
        &self,
        console_level: Option<LevelValue>,
        file_level: Option<LevelValue>,
    ) -> Result<(), LogError> {
        let console_level = console_level.as_ref().map(LevelValue::resolve).transpose()?;
        let file_level = file_level.as_ref().map(LevelValue::resolve).transpose()?;

        self.apply_levels(console_level, file_level);
        for node in self.descendants() {
            node.apply_levels(console_level, file_level);
        }

        self.internal(format!(
            "Set log levels (console: {:?}, file: {:?})",
            console_level, file_level
        ))
    }

    pub fn set_console_level(&self, level: impl Into<LevelValue>) -> Result<(), LogError> {
        self.set_level(Some(level.into()), None)
    }

    pub fn set_file_level(&self, level: impl Into<LevelValue>) -> Result<(), LogError> {
        self.set_level(None, Some(level.into()))
    }

    fn apply_levels(&self, console_level: Option<LogLevel>, file_level: Option<LogLevel>) {
        let mut state = self.lock_state();
        if let Some(level) = console_level {
            state.console_level = level;
        }
        if let Some(level) = file_level {
            state.file_level = level;
        }
    }

    // ---------------------------------------------------------------------
    // 生命周期
    // ---------------------------------------------------------------------

    /// 创建 handler，回放缓冲区并进入 Live，然后启动全部子节点
    ///
    /// 幂等；已关闭的节点不会重新启动。创建 handler 失败时节点保持 Buffering，缓冲区不变。
    /// 回放中的写入错误不会阻止进入 Live，第一个错误作为返回值。
    pub fn start(&self) -> Result<(), LogError> {
        let (file_path, no_file_logging) = {
            let state = self.lock_state();
            if !matches!(state.sink, SinkState::Buffering(_)) {
                return Ok(());
            }
            (state.file_path.clone(), state.no_file_logging)
        };

        let handlers = self.settings.build_handlers(&file_path, no_file_logging)?;
        self.start_with(handlers)
    }

    /// 使用给定的 handler 启动
    pub fn start_with(&self, handlers: HandlerSet) -> Result<(), LogError> {
        let mut first_error = None;
        let children = {
            let mut state = self.lock_state();
            let records = match &mut state.sink {
                SinkState::Buffering(buffer) => buffer.drain(),
                _ => return Ok(()),
            };

            // 回放时按当前级别过滤；写入失败不中断回放，第一个错误在最后返回
            for record in &records {
                if let Err(err) = handlers.dispatch(record, state.console_level, state.file_level) {
                    first_error.get_or_insert(LogError::from(err));
                }
            }
            state.sink = SinkState::Live(handlers.clone());
            state.started_at = Some(Local::now());
            state.children.clone()
        };

        let _ = self.internal("Logger started");

        for child in children {
            if let Err(err) = child.start_from_parent(&self.settings, &self.file_path(), &handlers) {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// 父节点启动时调用：同一套组件且写同一个文件时共享 handler，否则自己创建
    fn start_from_parent(
        &self,
        parent_settings: &Arc<NodeSettings>,
        parent_file_path: &Path,
        parent_handlers: &HandlerSet,
    ) -> Result<(), LogError> {
        let shared = Arc::ptr_eq(&self.settings, parent_settings)
            && self.lock_state().file_path == parent_file_path;

        if shared {
            self.start_with(parent_handlers.clone())
        } else {
            self.start()
        }
    }

    /// 把文件输出切换到 `path`，同时作用于全部后代
    ///
    /// 各节点保留自己的文件 formatter，共用同一个新文件。
    /// 新文件和全部 formatter 先准备好，失败时返回错误且不做任何修改。
    pub fn set_file_path(&self, path: impl Into<PathBuf>) -> Result<(), LogError> {
        let path = path.into();
        let descendants = self.descendants();
        let nodes = || std::iter::once(self).chain(descendants.iter().map(Arc::as_ref));

        let mut shared_appender: Option<Arc<dyn LogAppender>> = None;
        let mut file_handlers: Vec<(&Arc<NodeSettings>, Handler)> = Vec::new();
        for node in nodes() {
            let writes_file = {
                let state = node.lock_state();
                matches!(state.sink, SinkState::Live(_)) && !state.no_file_logging
            };
            if !writes_file
                || file_handlers.iter().any(|(settings, _)| Arc::ptr_eq(settings, &node.settings))
            {
                continue;
            }
            let appender = match shared_appender.clone() {
                Some(appender) => appender,
                None => {
                    let opened: Arc<dyn LogAppender> = Arc::new(FileAppender::open(&path)?);
                    shared_appender = Some(opened.clone());
                    opened
                }
            };
            let formatter = node.settings.build_file_formatter()?;
            file_handlers.push((&node.settings, Handler::new(formatter, appender)));
        }

        for node in nodes() {
            let handler = file_handlers
                .iter()
                .find(|(settings, _)| Arc::ptr_eq(settings, &node.settings))
                .map(|(_, handler)| handler);
            let mut state = node.lock_state();
            state.file_path = path.clone();
            let no_file_logging = state.no_file_logging;
            if let (SinkState::Live(handlers), Some(handler)) = (&mut state.sink, handler) {
                if !no_file_logging {
                    if let Some(old) = handlers.file.replace(handler.clone()) {
                        let _ = old.appender.flush();
                    }
                }
            }
        }

        self.internal(format!("Log file path set to {}", path.display()))
    }

    /// 刷新并关闭本节点及全部后代，之后的记录被丢弃
    pub fn close(&self) -> Result<(), LogError> {
        let _ = self.internal("Logger closing");

        let descendants = self.descendants();
        let mut first_error = None;
        for node in std::iter::once(self).chain(descendants.iter().map(Arc::as_ref)) {
            if let Err(err) = node.close_self() {
                first_error.get_or_insert(err);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    fn close_self(&self) -> Result<(), LogError> {
        let previous = std::mem::replace(&mut self.lock_state().sink, SinkState::Closed);
        if let SinkState::Live(handlers) = previous {
            handlers.flush()?;
        }
        Ok(())
    }

    /// 刷新当前 handler
    pub fn flush(&self) -> Result<(), LogError> {
        if let SinkState::Live(handlers) = &self.lock_state().sink {
            handlers.flush()?;
        }
        Ok(())
    }
}

impl fmt::Display for LoggerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (console_level, file_level, children) = {
            let state = self.lock_state();
            (state.console_level, state.file_level, state.children.len())
        };
        let parent = self
            .parent()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| ROOT_PARENT_NAME.to_string());

        write!(
            f,
            "<Logger: {} w/ levels {}, {} | Parent Logger: {} | Number of children: {}>",
            self.name, console_level, file_level, parent, children
        )
    }
}

impl fmt::Debug for LoggerNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock_state();
        f.debug_struct("LoggerNode")
            .field("name", &self.name)
            .field("console_level", &state.console_level)
            .field("file_level", &state.file_level)
            .field("file_path", &state.file_path)
            .field("children", &state.children.len())
            .finish()
    }
}
