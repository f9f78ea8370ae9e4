//! Entity to DTO conversion behind a trait, so the service can be tested
//! against a mock mapper.

use std::marker::PhantomData;

#[cfg_attr(test, mockall::automock)]
pub trait Mapper<S: Send + Sync + 'static, T: Send + Sync + 'static>: Send + Sync {
    fn map(&self, source: &S) -> T;
}

/// Maps through `T: From<&S>`
pub struct FieldMapper<S, T> {
    _types: PhantomData<fn(&S) -> T>,
}

impl<S, T> FieldMapper<S, T> {
    pub fn new() -> Self {
        Self {
            _types: PhantomData,
        }
    }
}

impl<S, T> Default for FieldMapper<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> Clone for FieldMapper<S, T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S, T> Mapper<S, T> for FieldMapper<S, T>
where
    S: Send + Sync + 'static,
    T: Send + Sync + 'static + for<'a> From<&'a S>,
{
    fn map(&self, source: &S) -> T {
        T::from(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskDto};

    #[test]
    fn test_field_mapper_uses_from_impl() {
        let mapper = FieldMapper::<Task, TaskDto>::new();
        let dto = mapper.map(&Task::with_id(2, "dishes", true));

        assert_eq!(dto, TaskDto::new(2, "dishes", true));
    }

    #[test]
    fn test_mock_mapper_satisfies_mapper_bounds() {
        fn project<M: Mapper<Task, TaskDto>>(mapper: &M, task: &Task) -> TaskDto {
            mapper.map(task)
        }

        let mut mock = MockMapper::<Task, TaskDto>::new();
        mock.expect_map().times(1).returning(|task: &Task| TaskDto::from(task));

        let dto = project(&mock, &Task::with_id(1, "Laundry", true));
        assert_eq!(dto, TaskDto::new(1, "Laundry", true));
    }
}
