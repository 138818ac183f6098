use super::FormSurface;
use crate::models::{FormValues, ValidationReport};
use crate::service::insurance::ConditionalRequirement;
use crate::service::FormValidator;
use tracing::info;

/// 界面事件处理: 调用纯函数, 再把结果写回界面
pub struct FormController {
    validator: FormValidator,
}

impl FormController {
    pub fn new(validator: FormValidator) -> Self {
        Self { validator }
    }

    pub fn validator(&self) -> &FormValidator {
        &self.validator
    }

    /// 从界面读取声明过的字段
    pub fn snapshot(&self, surface: &impl FormSurface) -> FormValues {
        FormValues::from_pairs(
            self.validator
                .schema()
                .fields
                .iter()
                .map(|spec| (spec.name.clone(), surface.value(&spec.name))),
        )
    }

    /// 提交: 先清除旧错误, 再逐字段标注全部失败; 返回是否允许提交
    pub fn on_submit(&self, surface: &mut impl FormSurface) -> ValidationReport {
        surface.clear_all_errors();

        let report = self.validator.validate(&self.snapshot(&*surface));
        for failure in &report.failures {
            surface.show_error(&failure.field, &failure.message);
        }

        if !report.valid {
            info!(
                "Submission of {} blocked: {} failures",
                report.form,
                report.failures.len()
            );
        }
        report
    }

    /// 失焦: 只校验当前字段
    pub fn on_blur(&self, surface: &mut impl FormSurface, field: &str) -> bool {
        let check = self.validator.check_field(field, &self.snapshot(&*surface));
        surface.clear_error(field);
        if let Some(message) = &check.message {
            surface.show_error(field, message);
        }
        check.is_valid()
    }

    /// 输入: 清除该字段的错误, 账单字段同时刷新派生值
    pub fn on_input(&self, surface: &mut impl FormSurface, field: &str) {
        surface.clear_error(field);
        if self.validator.schema().is_billing_input(field) {
            self.on_billing_input(surface);
        }
    }

    /// 重新计算未结金额和付款状态并写回
    pub fn on_billing_input(&self, surface: &mut impl FormSurface) {
        let Some(rule) = &self.validator.schema().billing else {
            return;
        };
        let Some(state) = self.validator.derive_billing(&self.snapshot(&*surface)) else {
            return;
        };

        if let Some(field) = &rule.outstanding_field {
            surface.set_value(field, &state.outstanding.to_string());
        }
        if let Some(field) = &rule.status_field {
            surface.set_value(field, state.payment_status.label());
        }
    }

    /// 保险选择变化: 切换详情的显示/必填, 取消时清空详情
    pub fn on_insurance_change(&self, surface: &mut impl FormSurface) {
        let Some(rule) = &self.validator.schema().insurance else {
            return;
        };

        let covered = ConditionalRequirement::is_covered(&surface.value(&rule.selector_field));
        let dependent = ConditionalRequirement::evaluate(covered);

        surface.set_visible(&rule.details_field, dependent.visible);
        surface.set_required(&rule.details_field, dependent.required);
        if !dependent.required {
            surface.set_value(&rule.details_field, "");
            surface.clear_error(&rule.details_field);
        }
    }

    /// 初始状态: 派生字段和保险详情与当前值同步
    pub fn on_load(&self, surface: &mut impl FormSurface) {
        self.on_billing_input(surface);
        self.on_insurance_change(surface);
    }

    /// 按字段分发 change 事件
    pub fn on_change(&self, surface: &mut impl FormSurface, field: &str) {
        if self.validator.schema().is_insurance_selector(field) {
            self.on_insurance_change(surface);
        } else {
            self.on_input(surface, field);
        }
    }
}
