// ============================================================================
// IMAGE STATE - Estado del paso 5 compartido con los callbacks HTTP
// ============================================================================

use crate::state::reactivity::ReactiveState;
use crate::viewmodels::images_viewmodel::ImagesViewModel;

/// La lista de imágenes pertenece a este estado; solo se modifica dentro de
/// `update` desde los handlers del paso 5 (event loop de un solo hilo)
pub type ImageState = ReactiveState<ImagesViewModel>;

pub fn new_image_state(max_images: usize) -> ImageState {
    ReactiveState::new(ImagesViewModel::new(max_images))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::image::{ImageId, ProvisionalImage};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_each_completion_rerenders_full_list() {
        let state = new_image_state(5);
        state.update(|vm| vm.load(Vec::new()));
        let renders: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
        {
            let renders = renders.clone();
            state.subscribe(move |vm| renders.borrow_mut().push(vm.images().len()));
        }

        state.update(|vm| vm.begin_batch(2)).unwrap();

        // Dos callbacks independientes (como dos spawn_local)
        let first = state.clone();
        let second = state.clone();
        second.update(|vm| vm.upload_completed(Ok(ProvisionalImage::new(ImageId::new("b"), "/b"))));
        first.update(|vm| vm.upload_completed(Ok(ProvisionalImage::new(ImageId::new("a"), "/a"))));

        assert_eq!(*renders.borrow(), vec![0, 1, 2]);
        state.with(|vm| {
            assert_eq!(vm.primary().map(|img| img.id.as_str()), Some("b"));
            assert!(!vm.is_uploading());
        });
    }
}
