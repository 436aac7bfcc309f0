use super::{
    conv::ConvLayer,
    element_wise::{ElementWiseLayer, ElementWiseOperation},
    input_buffer::InputLayer,
    layer::Layer,
    linear::LinearLayer,
    pooling::PoolingLayer,
};

pub struct Layers;

impl Layers {
    pub fn input(out_features: usize, out_size: usize) -> Box<dyn Layer> {
        Box::new(InputLayer::new(out_features, out_size))
    }

    pub fn conv(
        in_features: usize,
        out_features: usize,
        out_size: usize,
        kernel_size: usize,
    ) -> Box<dyn Layer> {
        Box::new(ConvLayer::new(in_features, out_features, out_size, kernel_size))
    }

    pub fn conv_with(
        in_features: usize,
        out_features: usize,
        out_size: usize,
        kernel_size: usize,
        stride: usize,
    ) -> Box<dyn Layer> {
        Box::new(ConvLayer::new_with(
            in_features,
            out_features,
            out_size,
            kernel_size,
            stride,
        ))
    }

    pub fn linear(in_features: usize, out_features: usize) -> Box<dyn Layer> {
        Box::new(LinearLayer::new(in_features, out_features))
    }

    pub fn linear_with(in_features: usize, out_features: usize, in_size: usize) -> Box<dyn Layer> {
        Box::new(LinearLayer::new_with(in_features, out_features, in_size))
    }

    pub fn pool(features: usize, out_size: usize, region: usize) -> Box<dyn Layer> {
        Box::new(PoolingLayer::new(features, out_size, region))
    }

    pub fn pool_with(features: usize, out_size: usize, region: usize, stride: usize) -> Box<dyn Layer> {
        Box::new(PoolingLayer::new_with(features, out_size, region, stride))
    }

    pub fn add(features: usize, out_size: usize) -> Box<dyn Layer> {
        Box::new(ElementWiseLayer::new(ElementWiseOperation::Add, features, out_size))
    }

    pub fn mul(features: usize, out_size: usize) -> Box<dyn Layer> {
        Box::new(ElementWiseLayer::new(ElementWiseOperation::Multiply, features, out_size))
    }

    pub fn max(features: usize, out_size: usize) -> Box<dyn Layer> {
        Box::new(ElementWiseLayer::new(ElementWiseOperation::Maximum, features, out_size))
    }
}
