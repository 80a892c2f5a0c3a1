use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment, requests::AssignmentListQuery, responses::AssignmentListResponse,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    users::{entities::User, requests::CreateUserRequest},
    writers::{
        entities::{Writer, WriterRating},
        requests::{CreateWriterRequest, UpdateWriterRequest, WriterListQuery},
        responses::WriterListResponse,
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 操作员账户方法
    // 创建操作员（pin 字段传入的是已哈希的凭证）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取操作员
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取操作员
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 更新最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 操作员总数（用于启动播种判断）
    async fn count_users(&self) -> Result<i64>;

    /// 学生管理方法
    // 创建学生
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    // 通过ID获取学生
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 全量列出学生（备份导出用）
    async fn list_all_students(&self) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;
    // 学生名下的任务数（删除前的引用检查）
    async fn count_assignments_for_student(&self, student_id: i64) -> Result<i64>;

    /// 写手管理方法
    // 创建写手
    async fn create_writer(&self, writer: CreateWriterRequest) -> Result<Writer>;
    // 通过ID获取写手
    async fn get_writer_by_id(&self, id: i64) -> Result<Option<Writer>>;
    // 分页列出写手
    async fn list_writers_with_pagination(
        &self,
        query: WriterListQuery,
    ) -> Result<WriterListResponse>;
    // 全量列出写手（备份导出用）
    async fn list_all_writers(&self) -> Result<Vec<Writer>>;
    // 更新写手信息
    async fn update_writer(&self, id: i64, update: UpdateWriterRequest) -> Result<Option<Writer>>;
    // 写入累计评分
    async fn update_writer_rating(&self, id: i64, rating: WriterRating) -> Result<bool>;
    // 删除写手
    async fn delete_writer(&self, id: i64) -> Result<bool>;
    // 写手当前在任的任务数（删除前的引用检查）
    async fn count_assignments_for_writer(&self, writer_id: i64) -> Result<i64>;

    /// 任务管理方法
    // 创建任务（ID 与时间戳由存储分配，传入值被忽略）
    async fn create_assignment(&self, assignment: Assignment) -> Result<Assignment>;
    // 通过ID获取任务
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    // 分页列出任务
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 全量列出任务（仪表盘聚合与备份导出用）
    async fn list_all_assignments(&self) -> Result<Vec<Assignment>>;
    // 某学生名下的全部任务
    async fn list_assignments_for_student(&self, student_id: i64) -> Result<Vec<Assignment>>;
    // 整体替换式更新任务
    async fn update_assignment(&self, id: i64, assignment: Assignment)
    -> Result<Option<Assignment>>;
    // 删除任务
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// 备份还原方法
    // 清空业务数据（任务、学生、写手；不动操作员账户）
    async fn purge_business_data(&self) -> Result<()>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
