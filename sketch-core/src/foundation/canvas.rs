use std::ops::Mul;

/// A drawing target family. Ties together the transform type and the command set
/// that every [PaintContext] of this canvas understands.
pub trait Canvas: Sized + 'static {
    type Transform: Mul<Self::Transform, Output = Self::Transform> + Clone + Send + Sync;
    type PaintCommand: Send + Sync;

    fn identity_transform() -> Self::Transform;
}

/// The sink a render callback paints into.
///
/// The same command stream is consumed by a GPU scene encoder when presenting to a window
/// and by a CPU rasterizer when painting headlessly.
pub trait PaintContext {
    type Canvas: Canvas;

    fn add_command(&mut self, command: <Self::Canvas as Canvas>::PaintCommand);

    fn with_transform(
        &mut self,
        transform: <Self::Canvas as Canvas>::Transform,
        op: impl FnOnce(&mut Self),
    );
}
