use async_trait::async_trait;

use crate::error::Result;
use crate::types::FieldSet;

/// 表单中转服务 Trait
///
/// 唯一契约：提交一组字段，返回成功或失败。
/// 实现方只做一次尝试，不做重试。
#[async_trait]
pub trait FormRelay: Send + Sync {
    /// 中转服务标识符（用于日志）
    fn id(&self) -> &'static str;

    /// 提交字段集
    ///
    /// HTTP 2xx 返回 `Ok(())`，其余状态码或网络错误返回 `Err`。
    async fn submit(&self, fields: &FieldSet) -> Result<()>;
}

impl std::fmt::Debug for dyn FormRelay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FormRelay").field(&self.id()).finish()
    }
}
