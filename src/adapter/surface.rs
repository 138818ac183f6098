use crate::models::FormValues;
use indexmap::{IndexMap, IndexSet};

/// 表单界面抽象: 读取/写回字段值, 显示/清除错误, 切换显示与必填
pub trait FormSurface {
    fn value(&self, field: &str) -> String;
    fn set_value(&mut self, field: &str, value: &str);

    fn show_error(&mut self, field: &str, message: &str);
    fn clear_error(&mut self, field: &str);
    fn clear_all_errors(&mut self);

    fn set_visible(&mut self, field: &str, visible: bool);
    fn set_required(&mut self, field: &str, required: bool);
}

/// 内存中的表单 (命令行与测试使用)
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    values: FormValues,
    errors: IndexMap<String, Vec<String>>,
    hidden: IndexSet<String>,
    required: IndexSet<String>,
}

impl MemoryForm {
    pub fn new(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    pub fn is_visible(&self, field: &str) -> bool {
        !self.hidden.contains(field)
    }

    pub fn is_required(&self, field: &str) -> bool {
        self.required.contains(field)
    }
}

impl FormSurface for MemoryForm {
    fn value(&self, field: &str) -> String {
        self.values.get(field).to_string()
    }

    fn set_value(&mut self, field: &str, value: &str) {
        self.values.set(field, value);
    }

    fn show_error(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    fn clear_error(&mut self, field: &str) {
        self.errors.shift_remove(field);
    }

    fn clear_all_errors(&mut self) {
        self.errors.clear();
    }

    fn set_visible(&mut self, field: &str, visible: bool) {
        if visible {
            self.hidden.shift_remove(field);
        } else {
            self.hidden.insert(field.to_string());
        }
    }

    fn set_required(&mut self, field: &str, required: bool) {
        if required {
            self.required.insert(field.to_string());
        } else {
            self.required.shift_remove(field);
        }
    }
}
