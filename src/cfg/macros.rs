//! 组件注册相关的宏
//!
//! [`register_trait`](crate::cfg::register_trait) 要求组件实现 `From<Config>`，
//! 并且 `Box<T>` 可以转换为 `Box<dyn Trait>`，这里的两个宏生成这些样板代码。

/// 为组件实现 `From<Config>`，调用 `Type::new(config)`
///
/// 用法：`impl_from!(ConsoleFormatterConfig => ConsoleFormatter)`
#[macro_export]
macro_rules! impl_from {
    ($config_type:ty => $target_type:ty) => {
        impl From<$config_type> for $target_type {
            fn from(config: $config_type) -> Self {
                <$target_type>::new(config)
            }
        }
    };
}

/// 为 `Box<T>` 实现到 `Box<dyn Trait>` 的转换
///
/// 用法：`impl_box_from!(ConsoleFormatter => dyn LogFormatter)`
#[macro_export]
macro_rules! impl_box_from {
    ($source_type:ty => dyn $trait_name:path) => {
        impl From<Box<$source_type>> for Box<dyn $trait_name> {
            fn from(source: Box<$source_type>) -> Self {
                source as Box<dyn $trait_name>
            }
        }
    };
}
