use crate::domain::TaskId;

pub fn encode_task_status_form(task_id: TaskId) -> Vec<(String, String)> {
    vec![(TaskId::FIELD.to_owned(), task_id.value().to_string())]
}
