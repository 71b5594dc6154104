//! cfg 模块 - 组件配置
//!
//! 通过 `{ type, options }` 形式的 [`TypeOptions`] 描述可插拔组件（formatter、appender），
//! 并由按 trait 划分的注册表在运行时构造对应的 trait object。

pub mod macros;
pub mod registry;
pub mod type_options;

pub use registry::{
    create_trait_from_type_options, is_registered, register_trait, registered_names,
};
pub use type_options::TypeOptions;
