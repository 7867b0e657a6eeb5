use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::math::lookuptable::dynamicinterpolatingtable::DynamicInterpolatingTable;
use crate::math::lookuptable::tablevalue::TableValue;

/// 設定檔中的一筆具名查表：
///
/// ```json
/// { "name": "gain", "x": [0, 1, 2], "f": [0, 10, 20] }
/// ```
#[derive(Deserialize)]
pub struct NamedTableJsonProp<T> {
    name: String,
    x: Vec<T>,
    f: Vec<T>
}

impl<T: TableValue> NamedTableJsonProp<T> {
    /// 經 `try_new` 檢查後轉為查表
    pub fn into_table(self) -> Result<(String, DynamicInterpolatingTable<T>), ManagerError> {
        let NamedTableJsonProp { name, x, f } = self;
        match DynamicInterpolatingTable::try_new(x, f) {
            Ok(table) => Ok((name, table)),
            Err(source) => Err(ManagerError::TableError { name, source })
        }
    }
}
