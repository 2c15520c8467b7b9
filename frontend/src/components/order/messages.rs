use common::model::order::OrderField;

#[derive(Clone)]
pub enum Msg {
    UpdateField(OrderField, String),
    Submit,
    HandoffSettled,
}
