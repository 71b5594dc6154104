// 按 trait 划分的组件注册表

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::RwLock;

use super::type_options::TypeOptions;

// 构造函数返回 Box<Box<dyn Trait>>，以 Box<dyn Any> 的形式存放
type TraitConstructor = Box<dyn Fn(JsonValue) -> Result<Box<dyn Any + Send + Sync>> + Send + Sync>;

// 外层 key 为 trait 的 TypeId，内层 key 为类型名称
static TRAIT_REGISTRY: Lazy<RwLock<HashMap<TypeId, HashMap<String, TraitConstructor>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// 为实现 `Trait` 的类型 `T` 注册构造函数
///
/// `T` 通过 `From<Config>` 构造，`Config` 由 [`TypeOptions::options`] 反序列化得到。
/// 同名重复注册会覆盖之前的构造函数。
///
/// # 示例
/// ```ignore
/// register_trait::<ConsoleFormatter, dyn LogFormatter, ConsoleFormatterConfig>("ConsoleFormatter")?;
/// let formatter: Box<dyn LogFormatter> = create_trait_from_type_options(&opts)?;
/// ```
pub fn register_trait<T, Trait, Config>(type_name: &str) -> Result<()>
where
    T: Send + Sync + 'static,
    Trait: ?Sized + Send + Sync + 'static,
    Config: DeserializeOwned + Send + Sync + 'static,
    T: From<Config>,
    Box<T>: Into<Box<Trait>>,
{
    let constructor: TraitConstructor = Box::new(|value| {
        let config: Config = serde_json::from_value(value)?;
        let trait_object: Box<Trait> = Box::new(T::from(config)).into();
        Ok(Box::new(trait_object) as Box<dyn Any + Send + Sync>)
    });

    let mut registry = TRAIT_REGISTRY
        .write()
        .map_err(|_| anyhow!("Failed to acquire write lock"))?;
    registry
        .entry(TypeId::of::<Trait>())
        .or_default()
        .insert(type_name.to_string(), constructor);

    Ok(())
}

/// 根据 TypeOptions 创建 trait object
pub fn create_trait_from_type_options<Trait>(type_options: &TypeOptions) -> Result<Box<Trait>>
where
    Trait: ?Sized + Send + Sync + 'static,
{
    let registry = TRAIT_REGISTRY
        .read()
        .map_err(|_| anyhow!("Failed to acquire read lock"))?;

    let constructor = registry
        .get(&TypeId::of::<Trait>())
        .and_then(|constructors| constructors.get(&type_options.type_name))
        .ok_or_else(|| {
            anyhow!(
                "Type '{}' not registered for this trait",
                type_options.type_name
            )
        })?;

    constructor(type_options.options.clone())?
        .downcast::<Box<Trait>>()
        .map(|boxed| *boxed)
        .map_err(|_| anyhow!("Failed to downcast to target trait type"))
}

/// 某个类型名是否已经为 `Trait` 注册
pub fn is_registered<Trait>(type_name: &str) -> bool
where
    Trait: ?Sized + 'static,
{
    TRAIT_REGISTRY
        .read()
        .map(|registry| {
            registry
                .get(&TypeId::of::<Trait>())
                .is_some_and(|constructors| constructors.contains_key(type_name))
        })
        .unwrap_or(false)
}

/// 为 `Trait` 注册的全部类型名（已排序）
pub fn registered_names<Trait>() -> Vec<String>
where
    Trait: ?Sized + 'static,
{
    let mut names: Vec<String> = TRAIT_REGISTRY
        .read()
        .map(|registry| {
            registry
                .get(&TypeId::of::<Trait>())
                .map(|constructors| constructors.keys().cloned().collect())
                .unwrap_or_default()
        })
        .unwrap_or_default();
    names.sort();
    names
}
