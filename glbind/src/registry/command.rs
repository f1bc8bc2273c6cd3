use std::ffi::CStr;

const fn symbol(name: &'static str) -> &'static CStr {
    match CStr::from_bytes_with_nul(name.as_bytes()) {
        Ok(name) => name,
        Err(_) => panic!("symbol names are NUL terminated"),
    }
}

macro_rules! commands {
    ($($variant:ident,)*) => {
        /// Entry points known to the loader. The symbol name is the variant
        /// name prefixed with `gl`.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Command {
            $($variant,)*
        }

        impl Command {
            pub const ALL: &'static [Command] = &[$(Command::$variant,)*];
            pub const COUNT: usize = Command::ALL.len();

            /// Symbol handed to the lookup callback, `glActiveTexture`.
            #[inline]
            pub const fn name(self) -> &'static CStr {
                match self {
                    $(Command::$variant => const {
                        symbol(concat!("gl", stringify!($variant), "\0"))
                    },)*
                }
            }

            #[inline]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Command::$variant => concat!("gl", stringify!($variant)),)*
                }
            }
        }
    };
}

commands! {
    ActiveTexture,
    ActiveTextureARB,
    AttachShader,
    BeginQuery,
    BeginQueryARB,
    BindAttribLocationARB,
    BindBuffer,
    BindBufferARB,
    BindBufferBase,
    BindBufferBaseEXT,
    BindBufferBaseNV,
    BindBuffersBase,
    BindFragDataLocationIndexed,
    BindFramebuffer,
    BindFramebufferEXT,
    BindImageTexture,
    BindProgramARB,
    BindProgramNV,
    BindRenderbuffer,
    BindRenderbufferEXT,
    BindSampler,
    BindTexture,
    BindTextureEXT,
    BindVertexArray,
    BindVertexArrayAPPLE,
    BlendBarrierKHR,
    BlendBarrierNV,
    BlendColor,
    BlendColorEXT,
    BlendEquation,
    BlendEquationEXT,
    BlendEquationIndexedAMD,
    BlendEquationSeparate,
    BlendEquationSeparateEXT,
    BlendEquationi,
    BlendEquationiARB,
    BlendFunc,
    BlendFuncSeparate,
    BlendFuncSeparateEXT,
    BlendFuncSeparateINGR,
    BlitFramebuffer,
    BlitFramebufferEXT,
    BufferData,
    BufferDataARB,
    BufferStorage,
    BufferSubData,
    BufferSubDataARB,
    CheckFramebufferStatus,
    CheckFramebufferStatusEXT,
    ClampColor,
    ClampColorARB,
    Clear,
    ClearBufferfv,
    ClearColor,
    ClearDepth,
    ClearDepthf,
    ClearDepthfOES,
    ClearStencil,
    ClearTexImage,
    ClientActiveTexture,
    ClientActiveTextureARB,
    ClientWaitSync,
    ClipControl,
    ColorMask,
    CompileShader,
    CompressedTexImage2D,
    CompressedTexImage2DARB,
    CopyImageSubData,
    CopyImageSubDataNV,
    CreateBuffers,
    CreateProgram,
    CreateShader,
    CreateTextures,
    CreateVertexArrays,
    CullFace,
    DebugMessageCallback,
    DebugMessageCallbackAMD,
    DebugMessageCallbackARB,
    DebugMessageControl,
    DebugMessageControlARB,
    DebugMessageEnableAMD,
    DebugMessageInsert,
    DebugMessageInsertAMD,
    DebugMessageInsertARB,
    DeleteBuffers,
    DeleteBuffersARB,
    DeleteFramebuffers,
    DeleteFramebuffersEXT,
    DeleteProgram,
    DeleteProgramsARB,
    DeleteProgramsNV,
    DeleteShader,
    DeleteSync,
    DeleteTextures,
    DeleteVertexArrays,
    DeleteVertexArraysAPPLE,
    DepthFunc,
    DepthMask,
    DepthRangef,
    DepthRangefOES,
    Disable,
    DisableVertexAttribArray,
    DisableVertexAttribArrayARB,
    DispatchCompute,
    DrawArrays,
    DrawArraysEXT,
    DrawArraysIndirect,
    DrawArraysInstanced,
    DrawArraysInstancedARB,
    DrawArraysInstancedBaseInstance,
    DrawArraysInstancedEXT,
    DrawBuffer,
    DrawBuffers,
    DrawBuffersARB,
    DrawBuffersATI,
    DrawElements,
    DrawElementsBaseVertex,
    DrawElementsInstanced,
    DrawElementsInstancedARB,
    DrawElementsInstancedEXT,
    DrawRangeElements,
    DrawRangeElementsEXT,
    Enable,
    EnableVertexAttribArray,
    EnableVertexAttribArrayARB,
    EndQuery,
    EndQueryARB,
    FenceSync,
    Finish,
    Flush,
    FlushMappedBufferRange,
    FlushMappedBufferRangeAPPLE,
    FramebufferRenderbuffer,
    FramebufferRenderbufferEXT,
    FramebufferTexture,
    FramebufferTexture2D,
    FramebufferTexture2DEXT,
    FramebufferTextureARB,
    FramebufferTextureEXT,
    FrontFace,
    GenBuffers,
    GenBuffersARB,
    GenFramebuffers,
    GenFramebuffersEXT,
    GenProgramsARB,
    GenProgramsNV,
    GenQueries,
    GenQueriesARB,
    GenRenderbuffers,
    GenRenderbuffersEXT,
    GenSamplers,
    GenTextures,
    GenVertexArrays,
    GenVertexArraysAPPLE,
    GenerateMipmap,
    GenerateMipmapEXT,
    GetDebugMessageLog,
    GetDebugMessageLogARB,
    GetError,
    GetGraphicsResetStatus,
    GetGraphicsResetStatusARB,
    GetInteger64v,
    GetIntegerv,
    GetProgramBinary,
    GetProgramiv,
    GetQueryObjecti64v,
    GetQueryObjecti64vEXT,
    GetShaderiv,
    GetString,
    GetStringi,
    GetUniformBlockIndex,
    GetUniformLocation,
    Hint,
    IsBuffer,
    IsBufferARB,
    IsTexture,
    LabelObjectEXT,
    LineWidth,
    LinkProgram,
    MapBuffer,
    MapBufferARB,
    MapBufferRange,
    MaxShaderCompilerThreadsARB,
    MaxShaderCompilerThreadsKHR,
    MemoryBarrier,
    MemoryBarrierEXT,
    MinSampleShading,
    MinSampleShadingARB,
    MultiDrawArrays,
    MultiDrawArraysEXT,
    MultiDrawArraysIndirect,
    MultiDrawArraysIndirectAMD,
    MultiDrawArraysIndirectCount,
    MultiDrawArraysIndirectCountARB,
    MultiTexCoord2f,
    MultiTexCoord2fARB,
    NamedBufferData,
    NamedBufferDataEXT,
    ObjectLabel,
    PatchParameteri,
    PixelStorei,
    PointParameterf,
    PointParameterfARB,
    PointParameterfEXT,
    PointParameterfSGIS,
    PointParameteri,
    PointSize,
    PolygonMode,
    PolygonOffset,
    PolygonOffsetClamp,
    PolygonOffsetClampEXT,
    PopDebugGroup,
    PopGroupMarkerEXT,
    PrimitiveRestartIndex,
    PrimitiveRestartIndexNV,
    ProgramBinary,
    ProgramParameteri,
    ProgramParameteriARB,
    ProgramParameteriEXT,
    ProgramStringARB,
    PushDebugGroup,
    PushGroupMarkerEXT,
    QueryCounter,
    ReadBuffer,
    ReadPixels,
    ReleaseShaderCompiler,
    RenderbufferStorage,
    RenderbufferStorageEXT,
    RenderbufferStorageMultisample,
    RenderbufferStorageMultisampleEXT,
    SampleCoverage,
    SampleCoverageARB,
    SamplerParameteri,
    Scissor,
    ShaderBinary,
    ShaderSource,
    SpecializeShader,
    SpecializeShaderARB,
    StencilFuncSeparate,
    TexBuffer,
    TexBufferARB,
    TexBufferEXT,
    TexImage2D,
    TexImage3D,
    TexImage3DEXT,
    TexParameterf,
    TexParameteri,
    TexStorage2D,
    TexStorage2DEXT,
    TexSubImage2D,
    TexSubImage3D,
    TexSubImage3DEXT,
    TextureBarrier,
    TextureBarrierNV,
    TextureStorage2D,
    Uniform1i,
    Uniform1iARB,
    Uniform4f,
    Uniform4fARB,
    UniformBlockBinding,
    UniformMatrix2x3fv,
    UniformMatrix4fv,
    UniformMatrix4fvARB,
    UniformMatrix4x3fv,
    UnmapBuffer,
    UnmapBufferARB,
    UseProgram,
    VertexAttribDivisor,
    VertexAttribDivisorARB,
    VertexAttribIPointer,
    VertexAttribIPointerEXT,
    VertexAttribPointer,
    VertexAttribPointerARB,
    Viewport,
}

impl Command {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.iter().copied().find(|command| command.as_str() == name)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_names() {
        assert_eq!(Command::ActiveTexture.name(), c"glActiveTexture");
        assert_eq!(Command::ActiveTextureARB.name(), c"glActiveTextureARB");
        assert_eq!(Command::GetStringi.as_str(), "glGetStringi");
        assert_eq!(Command::from_name("glDrawArrays"), Some(Command::DrawArrays));
        assert_eq!(Command::from_name("DrawArrays"), None);
    }

    #[test]
    fn test_c_and_str_names_agree() {
        for command in Command::ALL {
            assert_eq!(command.name().to_str().unwrap(), command.as_str());
            assert!(command.as_str().starts_with("gl"));
        }
    }
}
