use std::fmt;

use crate::domain::entities::record::Record;

type AddHandler = Box<dyn FnMut()>;
type EditHandler<R> = Box<dyn FnMut(&R)>;
type DeleteHandler<R> = Box<dyn FnMut(<R as Record>::Id)>;

pub struct RowActions<R: Record> {
    on_add: Option<AddHandler>,
    on_edit: Option<EditHandler<R>>,
    on_delete: Option<DeleteHandler<R>>,
}

impl<R: Record> Default for RowActions<R> {
    fn default() -> Self {
        Self {
            on_add: None,
            on_edit: None,
            on_delete: None,
        }
    }
}

impl<R: Record> RowActions<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_add(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_add = Some(Box::new(handler));
        self
    }

    pub fn on_edit(mut self, handler: impl FnMut(&R) + 'static) -> Self {
        self.on_edit = Some(Box::new(handler));
        self
    }

    pub fn on_delete(mut self, handler: impl FnMut(R::Id) + 'static) -> Self {
        self.on_delete = Some(Box::new(handler));
        self
    }

    pub fn can_add(&self) -> bool {
        self.on_add.is_some()
    }

    pub fn can_edit(&self) -> bool {
        self.on_edit.is_some()
    }

    pub fn can_delete(&self) -> bool {
        self.on_delete.is_some()
    }

    pub(crate) fn fire_add(&mut self) -> bool {
        match self.on_add.as_mut() {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub(crate) fn fire_edit(&mut self, record: &R) -> bool {
        match self.on_edit.as_mut() {
            Some(handler) => {
                handler(record);
                true
            }
            None => false,
        }
    }

    pub(crate) fn fire_delete(&mut self, id: R::Id) -> bool {
        match self.on_delete.as_mut() {
            Some(handler) => {
                handler(id);
                true
            }
            None => false,
        }
    }
}

impl<R: Record> fmt::Debug for RowActions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowActions")
            .field("on_add", &self.can_add())
            .field("on_edit", &self.can_edit())
            .field("on_delete", &self.can_delete())
            .finish()
    }
}
