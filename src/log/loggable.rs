use crate::log::error::LogError;
use crate::log::node::{ChildOptions, LoggerNode};
use std::any::Any;
use std::sync::Arc;

/// 持有一个 logger 节点的类型
///
/// 实现者只需提供 [`log_device`](Loggable::log_device)，即可为自己的方法派生子 logger。
///
/// ```ignore
/// struct Service { log: Arc<LoggerNode> }
///
/// impl Loggable for Service {
///     fn log_device(&self) -> &Arc<LoggerNode> { &self.log }
/// }
///
/// let log = service.method_logger("handle")?; // Service:handle
/// ```
pub trait Loggable: Any {
    fn log_device(&self) -> &Arc<LoggerNode>;

    /// 方法级子 logger，名称为 `<device>:<method>`
    fn method_logger(&self, method: &str) -> Result<Arc<LoggerNode>, LogError> {
        self.log_device().get_child_with(ChildOptions::method(method))
    }

    /// 创建子 logger，只允许同类型的实例调用
    fn create_child_logger(&self, caller: &dyn Any, name: &str) -> Result<Arc<LoggerNode>, LogError>
    where
        Self: Sized,
    {
        if !caller.is::<Self>() {
            return Err(LogError::PermissionDenied(format!(
                "child logger {} of {} requested from outside {}",
                name,
                self.log_device().name(),
                std::any::type_name::<Self>()
            )));
        }
        self.create_child_logger_unchecked(name)
    }

    /// 不做调用方检查的版本
    fn create_child_logger_unchecked(&self, name: &str) -> Result<Arc<LoggerNode>, LogError> {
        self.log_device().get_child(name)
    }
}
